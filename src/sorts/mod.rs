mod comparative_sort;
mod lsd_sort;
mod msd_sort;
mod out_of_place_sort;

pub use comparative_sort::*;
pub use lsd_sort::*;
pub use msd_sort::*;
pub use out_of_place_sort::*;
