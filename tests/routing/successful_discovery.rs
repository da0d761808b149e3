use std::sync::Arc ;
use isoload::{ DelegatingRouter, DescriptorFormat, PluginRoot };

#[test]
fn routing_test_each_bundle_gets_its_own_namespace() {

    let root = tempfile::tempdir().expect( "Failed to create temp root" );
    crate::fixture_tree::write_bundle( root.path(), "alpha", &[ "alpha.Main" ], &[( "alpha.Main", "class alpha" )]);
    crate::fixture_tree::write_bundle( root.path(), "beta", &[ "beta.Main" ], &[( "beta.Main", "class beta" )]);
    crate::fixture_tree::write_bundle( root.path(), "gamma", &[ "gamma.Main" ], &[( "gamma.Main", "class gamma" )]);

    let router = DelegatingRouter::initialize(
        &[ PluginRoot::new( root.path() )],
        &DescriptorFormat,
        &crate::fixture_tree::empty_parent(),
    ).expect( "Initialization failed" );

    assert_eq!( router.namespaces().len(), 3 );
    assert!( router.warnings().is_empty() );

    assert_eq!( router.resolve( "alpha.Main" ).expect( "Expected alpha" ).body(), "class alpha" );
    assert_eq!( router.resolve( "beta.Main" ).expect( "Expected beta" ).body(), "class beta" );
    assert_eq!( router.resolve( "gamma.Main" ).expect( "Expected gamma" ).body(), "class gamma" );

    let alpha = router.namespace_of( "alpha.Main" ).expect( "Expected alpha namespace" );
    let beta = router.namespace_of( "beta.Main" ).expect( "Expected beta namespace" );
    let gamma = router.namespace_of( "gamma.Main" ).expect( "Expected gamma namespace" );

    assert!( !Arc::ptr_eq( alpha, beta ));
    assert!( !Arc::ptr_eq( beta, gamma ));
    assert!( !Arc::ptr_eq( alpha, gamma ));

}
