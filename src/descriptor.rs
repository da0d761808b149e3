//! The built-in TOML-descriptor artifact layout.
//!
//! An archive is a `.plug` file whose contents are a TOML descriptor:
//!
//! ```toml
//! exports = [ "demo.sink.HttpSink" ]
//!
//! [classes]
//! "demo.sink.HttpSink" = "class HttpSink { .. }"
//! "demo.sink.util.Backoff" = "class Backoff { .. }"
//! ```
//!
//! An unpacked plugin directory carries the same descriptor as a
//! `plugin.toml` file directly inside it.

use std::collections::HashMap ;
use std::path::{ Path, PathBuf };
use serde::Deserialize ;

use crate::format::{ ArchiveContents, OpenError, SourceFormat };

const ARCHIVE_EXTENSION: &str = "plug" ;
const DESCRIPTOR_FILE: &str = "plugin.toml" ;

/// A class definition decoded from a descriptor archive.
///
/// The origin records which archive or directory the definition came from,
/// so two plugins bundling the same class name stay distinguishable.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct ClassDef {
    origin: PathBuf,
    body: String,
}

impl ClassDef {
    /// Creates a class definition. Mostly useful for building shared
    /// parent namespaces by hand.
    pub fn new( origin: impl Into<PathBuf>, body: impl Into<String> ) -> Self {
        Self { origin: origin.into(), body: body.into() }
    }

    /// The archive or directory the definition was decoded from.
    #[inline] pub fn origin( &self ) -> &Path { &self.origin }

    /// The serialized definition payload.
    #[inline] pub fn body( &self ) -> &str { &self.body }
}

/// The built-in [`SourceFormat`]: TOML descriptors in `.plug` archives and
/// `plugin.toml`-bearing directories.
#[derive( Debug, Clone, Copy, Default )]
pub struct DescriptorFormat ;

impl SourceFormat for DescriptorFormat {
    type Class = ClassDef ;

    fn recognises( &self, path: &Path ) -> bool {
        match path.is_dir() {
            true => path.join( DESCRIPTOR_FILE ).is_file(),
            false => path.extension().is_some_and(| extension | extension == ARCHIVE_EXTENSION ),
        }
    }

    fn open( &self, path: &Path ) -> Result<ArchiveContents<ClassDef>, OpenError> {

        let descriptor = match path.is_dir() {
            false => path.to_path_buf(),
            true => {
                let descriptor = path.join( DESCRIPTOR_FILE );
                match descriptor.is_file() {
                    true => descriptor,
                    false => return Err( OpenError::MissingDescriptor( descriptor )),
                }
            }
        };

        let raw = std::fs::read_to_string( &descriptor )?;
        if raw.trim().is_empty() {
            return Err( OpenError::Empty );
        }

        let data: DescriptorData = toml::from_str( &raw )?;
        Ok( ArchiveContents {
            classes: data.classes.into_iter()
                .map(|( name, body )| ( name, ClassDef::new( path, body )))
                .collect(),
            exports: data.exports,
        })

    }
}

#[derive( Debug, Deserialize )]
struct DescriptorData {
    #[serde( default )]
    exports: Vec<String>,
    #[serde( default )]
    classes: HashMap<String, String>,
}
