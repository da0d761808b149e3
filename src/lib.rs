//! A plugin isolation loader for building modular applications.
//!
//! Plugin hosts that load third-party artifacts all hit the same failure
//! mode: two plugins bundle conflicting private dependencies and their
//! symbols collide. `isoload` discovers deployable plugin artifacts
//! (archives or directory bundles) under a set of filesystem roots, builds
//! one isolated symbol-resolution namespace per discovered source so that
//! bundled class names cannot collide across plugins, and routes every
//! *exported* class name to its owning namespace through a single façade.
//!
//! # Core Concepts
//!
//! - [`PluginRoot`]: A configured filesystem location under which plugin
//!   artifacts are searched for. Roots are scanned in the order given.
//!
//! - [`PluginSource`]: One discovered deployable unit: a loose archive, a
//!   bundle directory merging several archives, or an unpacked plugin
//!   directory. Produced by [`scan`], consumed once by namespace
//!   construction.
//!
//! - [`SourceFormat`]: The artifact-format seam. Concrete packaging
//!   conventions are external inputs; the built-in [`DescriptorFormat`]
//!   reads TOML descriptors from `.plug` archives and
//!   `plugin.toml`-bearing directories.
//!
//! - [`IsolatedNamespace`]: An isolation boundary bound to one source.
//!   Resolution is two-tier: bundled content first, then the shared
//!   parent [`Namespace`] holding common API types. A plugin can neither
//!   leak its private classes to siblings nor lose its own definitions to
//!   a same-named parent symbol.
//!
//! - [`DelegatingRouter`]: The façade. Initialization scans, constructs
//!   namespaces (tolerating per-source failures), and builds the routing
//!   table; afterwards [`resolve`]( DelegatingRouter::resolve ) and
//!   [`namespace_of`]( DelegatingRouter::namespace_of ) are lock-free
//!   shared reads.
//!
//! # Example
//!
//! ```no_run
//! use std::collections::HashMap ;
//! use std::sync::Arc ;
//! use isoload::{ ClassDef, DelegatingRouter, DescriptorFormat, NotFound, PluginRoot };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // The shared parent holds the common plugin-facing API types. Any
//!     // map-backed namespace works; plugins fall back to it for names
//!     // they do not bundle themselves.
//!     let parent = Arc::new( HashMap::from([(
//!         "host.api.Connector".to_string(),
//!         ClassDef::new( "host", "interface Connector" ),
//!     )]));
//!
//!     let roots = vec![ PluginRoot::new( "/opt/plugins" )];
//!     let router = DelegatingRouter::initialize( &roots, &DescriptorFormat, &parent )?;
//!
//!     // Malformed archives and contested export names degrade to
//!     // warnings; they never prevent the router from becoming ready.
//!     router.warnings().iter().for_each(| warning | eprintln!( "{warning}" ));
//!
//!     match router.resolve( "demo.sink.HttpSink" ) {
//!         Ok( class ) => println!( "loaded from {}", class.origin().display() ),
//!         Err( NotFound( name )) => println!( "{name} is not plugin-provided" ),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Partial Failure
//!
//! Discovery and construction degrade gracefully: a corrupt archive drops
//! only its own source, a contested export name goes to the first
//! namespace in scan order, and both are recorded on the router's
//! [`warnings`]( DelegatingRouter::warnings ) channel. The only hard
//! failure out of initialization is [`InvalidRoot`], a configured root
//! path that cannot be read at all.
//!
//! # Concurrency
//!
//! Initialization is a single-threaded, one-shot sequence. Once a router
//! exists, the routing table and every namespace are immutable; lookups
//! take `&self` and are safe from any number of concurrent readers. No
//! blocking I/O happens after initialization; archives are decoded during
//! construction and only the decoded tables are retained.

mod source ;
mod format ;
mod descriptor ;
mod scanner ;
mod namespace ;
mod router ;

pub use source::{ PluginRoot, PluginSource, SourceKind };
pub use format::{ ArchiveContents, OpenError, SourceFormat };
pub use descriptor::{ ClassDef, DescriptorFormat };
pub use scanner::{ scan, InvalidRoot };
pub use namespace::{ IsolatedNamespace, MalformedSource, Namespace };
pub use router::{ DelegatingRouter, NotFound, Warning };
