pub mod lane;
pub mod lane_section;
pub mod road;
