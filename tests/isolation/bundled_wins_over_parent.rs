use isoload::{ scan, DescriptorFormat, IsolatedNamespace, Namespace, PluginRoot };

#[test]
fn isolation_test_bundled_definition_shadows_parent() {

    let root = tempfile::tempdir().expect( "Failed to create temp root" );
    crate::fixture_tree::write_bundle(
        root.path(),
        "sink",
        &[ "demo.Sink" ],
        &[( "demo.Sink", "bundled definition" )],
    );

    let sources = scan( &[ PluginRoot::new( root.path() )], &DescriptorFormat )
        .expect( "Scan failed" );
    let parent = crate::fixture_tree::parent( &[( "demo.Sink", "parent definition" )]);

    let namespace = IsolatedNamespace::construct(
        sources.into_iter().next().expect( "Expected one source" ),
        &DescriptorFormat,
        parent,
    ).expect( "Construction failed" );

    let resolved = namespace.resolve( "demo.Sink" ).expect( "Expected bundled class" );
    assert_eq!( resolved.body(), "bundled definition" );

}
