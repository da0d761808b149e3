//! The artifact-format seam.
//!
//! Concrete archive layouts are external inputs to the loader: the core
//! only needs to recognise candidate artifacts during scanning and to open
//! one artifact into its classes and export set during namespace
//! construction. Both operations live behind [`SourceFormat`], so a host
//! can plug in its own packaging convention. The built-in layout is
//! [`DescriptorFormat`]( crate::DescriptorFormat ).

use std::collections::HashMap ;
use std::path::{ Path, PathBuf };
use thiserror::Error ;

/// Decoded contents of a single archive or unpacked plugin directory.
#[derive( Debug, Clone )]
pub struct ArchiveContents<C> {
    /// Every class definition bundled in the archive, keyed by
    /// fully-qualified name.
    pub classes: HashMap<String, C>,
    /// The names the archive intends to make resolvable through the
    /// router, in descriptor order. Names bundled but not listed here stay
    /// private to the owning namespace.
    pub exports: Vec<String>,
}

/// Recognises and opens plugin artifacts of one concrete layout.
pub trait SourceFormat {
    /// The class representation produced by this format.
    type Class ;

    /// Whether `path` looks like an artifact this format can open.
    ///
    /// Called with loose files while scanning a root, and with
    /// subdirectories to detect unpacked plugin layouts. Recognition is a
    /// cheap structural check; a recognised artifact may still fail to
    /// [`open`]( SourceFormat::open ) later.
    fn recognises( &self, path: &Path ) -> bool ;

    /// Decodes one artifact into its classes and export set.
    ///
    /// Any handle opened here must not outlive the call; the decoded
    /// tables are all that construction retains.
    ///
    /// # Errors
    /// Returns an [`OpenError`] when the artifact is corrupt, empty, or
    /// unreadable. The caller treats this as a per-source failure, never
    /// a fault.
    fn open( &self, path: &Path ) -> Result<ArchiveContents<Self::Class>, OpenError> ;
}

/// Failure to open or decode a single artifact.
#[derive( Debug, Error )]
pub enum OpenError {
    /// The artifact could not be read.
    #[error( "IO error: {0}" )] Io( #[from] std::io::Error ),
    /// The descriptor is not valid TOML.
    #[error( "descriptor parse error: {0}" )] Parse( #[from] toml::de::Error ),
    /// The artifact is zero-length.
    #[error( "empty archive" )] Empty,
    /// An unpacked plugin directory lost its descriptor between scanning
    /// and opening.
    #[error( "missing descriptor at '{}'", .0.display() )] MissingDescriptor( PathBuf ),
}
