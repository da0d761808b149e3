//! Plugin roots and discovered plugin sources.
//!
//! A [`PluginRoot`] is a configured filesystem location; a [`PluginSource`]
//! is one deployable unit of plugin content found under a root. Sources are
//! produced by the scanner and consumed exactly once by namespace
//! construction.

use std::path::{ Path, PathBuf };
use nonempty_collections::NEVec;

/// A filesystem location under which plugin artifacts are searched for.
///
/// Supplied once at initialization and immutable for the process lifetime.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct PluginRoot( PathBuf );

impl PluginRoot {
    /// Creates a root from any path-like value.
    pub fn new( path: impl Into<PathBuf> ) -> Self {
        Self( path.into() )
    }

    /// The configured path, exactly as supplied.
    #[inline] pub fn path( &self ) -> &Path { &self.0 }
}

impl From<PathBuf> for PluginRoot {
    fn from( path: PathBuf ) -> Self { Self( path ) }
}

impl From<&Path> for PluginRoot {
    fn from( path: &Path ) -> Self { Self( path.to_path_buf() ) }
}

/// How a plugin source was found under its root.
#[derive( Debug, Clone, Copy, PartialEq, Eq, Hash )]
pub enum SourceKind {
    /// A loose archive file sitting directly under a plugin root.
    Archive,
    /// A subdirectory of a root bundling one or more archives.
    BundleDirectory,
    /// A subdirectory of a root used directly as an unpacked plugin.
    TopLevelDirectory,
}

impl std::fmt::Display for SourceKind {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        match self {
            Self::Archive => write!( f, "archive" ),
            Self::BundleDirectory => write!( f, "bundle directory" ),
            Self::TopLevelDirectory => write!( f, "top-level directory" ),
        }
    }
}

/// One discovered deployable unit of plugin content.
///
/// Carries the absolute path it was discovered at, its [`SourceKind`], and
/// the non-empty list of archives backing it. A bundle directory is backed
/// by every archive found inside it; the other kinds are backed by their
/// own path.
#[derive( Debug, Clone )]
pub struct PluginSource {
    path: PathBuf,
    kind: SourceKind,
    archives: NEVec<PathBuf>,
}

impl PluginSource {

    pub(crate) fn archive( path: PathBuf ) -> Self {
        Self {
            archives: NEVec::new( path.clone() ),
            path,
            kind: SourceKind::Archive,
        }
    }

    pub(crate) fn bundle( path: PathBuf, archives: NEVec<PathBuf> ) -> Self {
        Self { path, kind: SourceKind::BundleDirectory, archives }
    }

    pub(crate) fn unpacked( path: PathBuf ) -> Self {
        Self {
            archives: NEVec::new( path.clone() ),
            path,
            kind: SourceKind::TopLevelDirectory,
        }
    }

    /// The path the source was discovered at.
    #[inline] pub fn path( &self ) -> &Path { &self.path }

    /// How the source was found under its root.
    #[inline] pub fn kind( &self ) -> SourceKind { self.kind }

    /// The archives backing this source, in deterministic scan order.
    /// Guaranteed to yield at least one path.
    pub fn archives( &self ) -> impl Iterator<Item = &Path> {
        self.archives.nonempty_iter().into_iter().map( PathBuf::as_path )
    }

}
