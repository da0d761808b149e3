//! Filesystem discovery of candidate plugin sources.

use std::path::{ Path, PathBuf };
use nonempty_collections::NEVec ;
use pipe_trait::Pipe ;
use thiserror::Error ;
use tracing::{ debug, warn };

use crate::format::SourceFormat ;
use crate::source::{ PluginRoot, PluginSource };

/// A plugin root that cannot be scanned at all.
///
/// The only failure that aborts initialization outright. Anything below a
/// readable root degrades to per-source warnings instead.
#[derive( Debug, Error )]
#[error( "invalid plugin root '{}': {reason}", path.display() )]
pub struct InvalidRoot {
    /// The root as supplied by configuration.
    pub path: PathBuf,
    /// Why it could not be scanned.
    #[source] pub reason: std::io::Error,
}

/// Enumerates candidate plugin sources under `roots`, in root order.
///
/// Per root: every directly contained recognised archive becomes an
/// [`Archive`]( crate::SourceKind::Archive ) source, and every immediate
/// subdirectory becomes a bundle candidate: a
/// [`BundleDirectory`]( crate::SourceKind::BundleDirectory ) source if any
/// archives are found inside it, a
/// [`TopLevelDirectory`]( crate::SourceKind::TopLevelDirectory ) source if
/// the format recognises the directory itself as an unpacked plugin, and
/// nothing otherwise. A root or subdirectory with no recognisable content
/// yields zero sources and is not an error.
///
/// Within a root the output is ordered lexicographically at every
/// directory level, so repeated scans of the same tree are reproducible.
///
/// # Errors
/// Returns [`InvalidRoot`] when a root cannot be canonicalized or read as
/// a directory at all.
pub fn scan<F: SourceFormat>(
    roots: &[PluginRoot],
    format: &F,
) -> Result<Vec<PluginSource>, InvalidRoot> {

    let mut sources = Vec::new();

    for root in roots {
        let canonical = std::fs::canonicalize( root.path() )
            .map_err(| reason | InvalidRoot { path: root.path().to_path_buf(), reason })?;
        debug!( root = %canonical.display(), "scanning plugin root" );
        scan_root( &canonical, format, &mut sources )
            .map_err(| reason | InvalidRoot { path: root.path().to_path_buf(), reason })?;
    }

    debug!( sources = sources.len(), "plugin source scan complete" );
    Ok( sources )

}

fn scan_root<F: SourceFormat>(
    root: &Path,
    format: &F,
    sources: &mut Vec<PluginSource>,
) -> Result<(), std::io::Error> {
    for entry in sorted_entries( root )? {
        match entry.is_dir() {
            false if format.recognises( &entry ) => sources.push( PluginSource::archive( entry )),
            false => {}
            true => if let Some( source ) = bundle_candidate( &entry, format ) {
                sources.push( source );
            },
        }
    }
    Ok(())
}

/// Turns one immediate subdirectory of a root into a source, if anything
/// recognisable lives inside it.
fn bundle_candidate<F: SourceFormat>( dir: &Path, format: &F ) -> Option<PluginSource> {
    let mut archives = collect_archives( dir, format ).into_iter();
    match archives.next() {
        Some( first ) => {
            let mut backing = NEVec::new( first );
            archives.for_each(| path | backing.push( path ));
            Some( PluginSource::bundle( dir.to_path_buf(), backing ))
        }
        None if format.recognises( dir ) => Some( PluginSource::unpacked( dir.to_path_buf() )),
        None => None,
    }
}

/// Collects every recognised archive below `dir`: files before
/// subdirectories, each level sorted by name. Unreadable entries are
/// skipped rather than failing the bundle.
fn collect_archives<F: SourceFormat>( dir: &Path, format: &F ) -> Vec<PathBuf> {

    let entries = match sorted_entries( dir ) {
        Ok( entries ) => entries,
        Err( reason ) => {
            warn!( dir = %dir.display(), %reason, "skipping unreadable bundle directory" );
            return Vec::new();
        }
    };

    let ( dirs, files ): ( Vec<_>, Vec<_> ) = entries.into_iter().partition(| path | path.is_dir() );

    files.into_iter()
        .filter(| path | format.recognises( path ))
        .chain( dirs.iter().flat_map(| sub | collect_archives( sub, format )))
        .collect()

}

fn sorted_entries( dir: &Path ) -> Result<Vec<PathBuf>, std::io::Error> {
    Ok( std::fs::read_dir( dir )?
        .filter_map( Result::ok )
        .map(| entry | entry.path() )
        .collect::<Vec<_>>()
        .pipe(| mut paths | { paths.sort(); paths }))
}
