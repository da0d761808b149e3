//! The delegating router: the top-level routing façade.

use std::collections::HashMap ;
use std::collections::hash_map::Entry ;
use std::path::PathBuf ;
use std::sync::Arc ;
use itertools::Itertools ;
use thiserror::Error ;
use tracing::{ debug, warn };

use crate::format::SourceFormat ;
use crate::namespace::{ IsolatedNamespace, MalformedSource, Namespace };
use crate::scanner::{ self, InvalidRoot };
use crate::source::PluginRoot ;

/// A class name unknown to the router.
///
/// An expected outcome, not a fault: callers probe whether a name is
/// plugin-provided and fall back to ordinary host resolution when it is
/// not.
#[derive( Debug, Error, Clone, PartialEq, Eq )]
#[error( "unknown plugin class: {0}" )]
pub struct NotFound( pub String );

/// A non-fatal problem recorded during initialization.
///
/// Warnings are observational: they are collected on the router and logged,
/// and never escalate into a failure of [`DelegatingRouter::initialize`].
#[derive( Debug, Error )]
pub enum Warning {
    /// A source was dropped because one of its archives could not be
    /// decoded.
    #[error( transparent )]
    MalformedSource( #[from] MalformedSource ),
    /// Two namespaces exported the same class name; the first in scan
    /// order keeps it, the loser stays usable for its private classes.
    #[error( "class '{name}' exported by both '{}' and '{}'; first wins", winner.display(), loser.display() )]
    NameConflict {
        /// The contested class name.
        name: String,
        /// Source path of the namespace that owns the name.
        winner: PathBuf,
        /// Source path of the namespace that lost the name.
        loser: PathBuf,
    },
}

/// First-wins index from exported class name to owning namespace.
///
/// Built once during initialization, read-only afterwards.
struct RoutingTable<P: Namespace> {
    entries: HashMap<String, Arc<IsolatedNamespace<P>>>,
}

impl<P: Namespace> RoutingTable<P> {

    fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Claims `name` for `owner` unless it is already owned; reports the
    /// current owner on conflict.
    fn claim(
        &mut self,
        name: &str,
        owner: &Arc<IsolatedNamespace<P>>,
    ) -> Result<(), Arc<IsolatedNamespace<P>>> {
        match self.entries.entry( name.to_string() ) {
            Entry::Occupied( existing ) => Err( Arc::clone( existing.get() )),
            Entry::Vacant( slot ) => {
                slot.insert( Arc::clone( owner ));
                Ok(())
            }
        }
    }

    fn get( &self, name: &str ) -> Option<&Arc<IsolatedNamespace<P>>> {
        self.entries.get( name )
    }

    fn len( &self ) -> usize {
        self.entries.len()
    }

}

/// The top-level routing façade.
///
/// Owns every successfully constructed [`IsolatedNamespace`] plus the
/// routing table over their exported names. Construction *is*
/// initialization, so a router value is always ready: a lookup against an
/// uninitialized router is unrepresentable. Everything is immutable after
/// construction: [`resolve`]( DelegatingRouter::resolve ) and
/// [`namespace_of`]( DelegatingRouter::namespace_of ) are plain shared
/// reads, safe from any number of threads without locking.
pub struct DelegatingRouter<P: Namespace> {
    namespaces: Vec<Arc<IsolatedNamespace<P>>>,
    table: RoutingTable<P>,
    warnings: Vec<Warning>,
}

impl<P: Namespace> DelegatingRouter<P> {

    /// Scans `roots`, constructs one isolated namespace per discovered
    /// source, and indexes every exported class name.
    ///
    /// Initialization always completes as long as the roots themselves are
    /// scannable: a malformed source drops only itself, and a contested
    /// export name goes to the first namespace in scan order; both are
    /// recorded as [`Warning`]s. Empty roots simply produce an empty
    /// router.
    ///
    /// # Errors
    /// Only [`InvalidRoot`], for a root path that cannot be read at all.
    pub fn initialize<F>(
        roots: &[PluginRoot],
        format: &F,
        parent: &Arc<P>,
    ) -> Result<Self, InvalidRoot>
    where
        F: SourceFormat<Class = P::Class>,
    {

        let sources = scanner::scan( roots, format )?;

        // Partitioning preserves scan order on both sides, which keeps the
        // first-wins tie-break below deterministic.
        let ( namespaces, failures ): ( Vec<_>, Vec<_> ) = sources.into_iter()
            .map(| source | IsolatedNamespace::construct( source, format, Arc::clone( parent )))
            .partition_result();

        let namespaces = namespaces.into_iter().map( Arc::new ).collect::<Vec<_>>();
        let mut warnings = failures.into_iter().map( Warning::from ).collect::<Vec<_>>();

        let mut table = RoutingTable::new();
        for namespace in &namespaces {
            for name in namespace.exports() {
                if let Err( owner ) = table.claim( name, namespace ) {
                    warnings.push( Warning::NameConflict {
                        name: name.clone(),
                        winner: owner.source().path().to_path_buf(),
                        loser: namespace.source().path().to_path_buf(),
                    });
                }
            }
        }

        warnings.iter().for_each(| warning | warn!( "{warning}" ));
        debug!(
            namespaces = namespaces.len(),
            routed = table.len(),
            warnings = warnings.len(),
            "delegating router initialized",
        );

        Ok( Self { namespaces, table, warnings })

    }

    /// Resolves an exported plugin class through its owning namespace's
    /// two-tier lookup.
    ///
    /// # Errors
    /// [`NotFound`] when no successfully constructed namespace exported
    /// `name`. Names visible only through the host's own base namespace
    /// are not handled here; callers fall back to ordinary resolution.
    pub fn resolve( &self, name: &str ) -> Result<&P::Class, NotFound> {
        self.table.get( name )
            .and_then(| namespace | namespace.resolve( name ))
            .ok_or_else(|| NotFound( name.to_string() ))
    }

    /// The namespace owning an exported class name, without resolving it.
    ///
    /// Used by callers that need to know which isolation boundary owns a
    /// class, e.g. to construct instances within that boundary later.
    ///
    /// # Errors
    /// [`NotFound`] under the same condition as
    /// [`resolve`]( DelegatingRouter::resolve ).
    pub fn namespace_of( &self, name: &str ) -> Result<&Arc<IsolatedNamespace<P>>, NotFound> {
        self.table.get( name ).ok_or_else(|| NotFound( name.to_string() ))
    }

    /// Every successfully constructed namespace, in scan order. Includes
    /// namespaces that lost a name conflict.
    #[inline] pub fn namespaces( &self ) -> &[Arc<IsolatedNamespace<P>>] { &self.namespaces }

    /// Non-fatal problems recorded during initialization: one entry per
    /// malformed source and one per contested export name.
    #[inline] pub fn warnings( &self ) -> &[Warning] { &self.warnings }

}

impl<P: Namespace> std::fmt::Debug for DelegatingRouter<P> {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        f.debug_struct( "DelegatingRouter" )
            .field( "namespaces", &self.namespaces )
            .field( "routed", &self.table.len() )
            .field( "warnings", &self.warnings )
            .finish()
    }
}
