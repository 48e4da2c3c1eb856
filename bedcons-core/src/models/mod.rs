pub mod region;
pub mod region_set;
pub mod strand;

// re-export for cleaner imports
pub use self::region::Region;
pub use self::region_set::RegionSet;
pub use self::strand::Strand;
