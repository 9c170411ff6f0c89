// Minimal walkthrough of collecting, querying and rendering styles

use css_compiler::styles::{Declaration, Filter, StyleRegistry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Testing CSS-Compiler Core Functionality");

    // Test 1: Registry
    println!("\n1. Testing Style Registry...");
    let registry = StyleRegistry::new();
    let head = registry.get_or_create("head");
    let footer = registry.get_or_create("footer");
    println!("   Instances: {:?}", registry.instance_ids());
    assert_eq!(registry.len(), 2);

    // Test 2: Independent producers
    println!("\n2. Adding declarations from independent producers...");
    head.add(Declaration::rule("body", "margin", "0"));
    head.add(
        Declaration::new()
            .query("(max-width:600px)")
            .element("body")
            .property("margin")
            .value("4px"),
    );
    head.add(Declaration::rule(".row", "display", ["-webkit-box", "flex"]));
    footer.add(Declaration::rule("footer", "color", "gray"));

    // Same instance id, same store
    registry
        .get_or_create("head")
        .add(Declaration::rule("body", "margin", "2px"));
    println!("   head: {} declarations, footer: {}", head.len(), footer.len());

    // Test 3: Filtered query
    println!("\n3. Testing filtered query...");
    let narrow = head.query(&Filter::new().query("(max-width:600px)").element("body"));
    println!("   Narrow-screen body rules: {:?}", narrow);
    let flex = head.query(&Filter::new().value("flex"));
    println!("   Declarations using flex: {}", flex.declaration_count());

    // Test 4: Render
    println!("\n4. Rendering head styles...");
    let css = head.render()?;
    println!("{}", css);

    println!("All instances:\n{}", registry.render_all()?);
    Ok(())
}
