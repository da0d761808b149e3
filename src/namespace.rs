//! Isolated per-plugin namespaces with two-tier resolution.

use std::collections::HashMap ;
use std::path::PathBuf ;
use std::sync::Arc ;
use itertools::Itertools ;
use thiserror::Error ;
use tracing::{ debug, warn };

use crate::format::{ OpenError, SourceFormat };
use crate::source::PluginSource ;

/// A symbol-resolution boundary.
///
/// Implemented by [`IsolatedNamespace`] and by plain `HashMap`s, so a host
/// can supply any map-backed namespace as the shared parent.
pub trait Namespace {
    /// The class representation resolved by this namespace.
    type Class ;

    /// Resolves a fully-qualified class name, if this namespace knows it.
    fn resolve( &self, name: &str ) -> Option<&Self::Class> ;
}

impl<C> Namespace for HashMap<String, C> {
    type Class = C ;
    fn resolve( &self, name: &str ) -> Option<&C> { self.get( name ) }
}

/// A plugin source that could not be opened or decoded.
///
/// Produced as a value during namespace construction and absorbed into the
/// router's warning channel; it never unwinds past the construction
/// boundary, and one malformed source never affects its siblings.
#[derive( Debug, Error )]
#[error( "malformed plugin source '{}': {reason}", path.display() )]
pub struct MalformedSource {
    /// The archive or unpacked directory that failed to open.
    pub path: PathBuf,
    /// Why it failed.
    #[source] pub reason: OpenError,
}

/// An isolation boundary bound to exactly one [`PluginSource`].
///
/// Holds the merged symbol table of the source's archives, the export set
/// discovered from descriptor metadata, and a shared handle to the parent
/// namespace used for fallback resolution of common API types. The parent
/// never references its children, so the handle graph stays acyclic.
///
/// Immutable after construction and never torn down before the router is.
pub struct IsolatedNamespace<P: Namespace> {
    source: PluginSource,
    classes: HashMap<String, P::Class>,
    exports: Vec<String>,
    parent: Arc<P>,
}

impl<P: Namespace> IsolatedNamespace<P> {

    /// Opens every archive backing `source` and merges them into one
    /// namespace.
    ///
    /// Merging is deterministic: archives are visited in scan order and
    /// the first definition of a class name wins. Exported names with no
    /// bundled definition are dropped, so a routed name can never dangle.
    /// Archive handles are scoped to this call; only the decoded tables
    /// live on.
    ///
    /// # Errors
    /// Fails with [`MalformedSource`] naming the offending archive if any
    /// backing archive cannot be decoded.
    pub fn construct<F>(
        source: PluginSource,
        format: &F,
        parent: Arc<P>,
    ) -> Result<Self, MalformedSource>
    where
        F: SourceFormat<Class = P::Class>,
    {

        let mut classes = HashMap::new();
        let mut exports = Vec::new();

        for archive in source.archives() {
            let contents = format.open( archive )
                .map_err(| reason | MalformedSource { path: archive.to_path_buf(), reason })?;
            for ( name, class ) in contents.classes {
                classes.entry( name ).or_insert( class );
            }
            exports.extend( contents.exports );
        }

        exports.retain(| name | match classes.contains_key( name ) {
            true => true,
            false => {
                warn!(
                    source = %source.path().display(),
                    class = %name,
                    "dropping exported name with no bundled definition",
                );
                false
            }
        });
        let exports = exports.into_iter().unique().collect::<Vec<_>>();

        debug!(
            source = %source.path().display(),
            classes = classes.len(),
            exports = exports.len(),
            "constructed isolated namespace",
        );
        Ok( Self { source, classes, exports, parent })

    }

    /// The source this namespace is bound to.
    #[inline] pub fn source( &self ) -> &PluginSource { &self.source }

    /// The names this namespace makes resolvable through the router, in
    /// descriptor order.
    #[inline] pub fn exports( &self ) -> &[String] { &self.exports }

    /// Resolves against bundled content only, without the parent fallback.
    pub fn resolve_local( &self, name: &str ) -> Option<&P::Class> {
        self.classes.get( name )
    }

}

impl<P: Namespace> Namespace for IsolatedNamespace<P> {
    type Class = P::Class ;

    /// Two-tier resolution: bundled content first, shared parent second.
    ///
    /// The order is load-bearing. A plugin's own definition wins over a
    /// same-named symbol in the parent, which is what keeps conflicting
    /// private dependencies of two plugins from colliding; names the
    /// plugin does not bundle still resolve to the shared API types.
    fn resolve( &self, name: &str ) -> Option<&P::Class> {
        self.resolve_local( name ).or_else(|| self.parent.resolve( name ))
    }
}

impl<P: Namespace> std::fmt::Debug for IsolatedNamespace<P> {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        f.debug_struct( "IsolatedNamespace" )
            .field( "source", &self.source )
            .field( "classes", &self.classes.len() )
            .field( "exports", &self.exports )
            .finish_non_exhaustive()
    }
}
