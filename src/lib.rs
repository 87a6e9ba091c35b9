use std::fmt::{Display, Formatter};

pub mod error;
pub mod osutil;

pub use error::{DropCachesError, Result};
pub use osutil::{drop_caches, drop_caches_at, CONTROL_PATH};

/// Which kernel caches a drop request reclaims
#[derive(Copy, Debug, Clone, Default, PartialEq, Eq)]
pub enum DropLevel {
    /// Clean page cache pages only
    #[default]
    PageCache,
    /// Reclaimable slab objects (dentries and inodes)
    Slab,
    /// Page cache and slab objects
    All,
}

impl DropLevel {
    /// The ASCII digit the control file expects for this level
    pub fn control_byte(&self) -> u8 {
        match self {
            Self::PageCache => b'1',
            Self::Slab => b'2',
            Self::All => b'3',
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::PageCache => "pagecache",
            Self::Slab => "slab",
            Self::All => "all",
        }
    }
}

impl Display for DropLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.as_str(), self.control_byte() as char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_page_cache() {
        assert_eq!(DropLevel::default(), DropLevel::PageCache);
        assert_eq!(DropLevel::default().control_byte(), b'1');
    }

    #[test]
    fn display_names_level() {
        assert_eq!(DropLevel::Slab.to_string(), "slab(2)");
        assert_eq!(DropLevel::All.to_string(), "all(3)");
    }
}
