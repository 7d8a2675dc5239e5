/// Intercept messages using the `log` crate and print them to STDOUT. Defaults to `info`;
/// override with `RUST_LOG`.
pub fn setup() {
    use env_logger::{Builder, Env};
    Builder::from_env(Env::default().default_filter_or("info")).init();
}
