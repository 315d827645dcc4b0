use nanograph::{props, Filter, Graph, GraphResult, GraphSnapshot, PropertyFilter};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Nanograph v{}", nanograph::version());
    println!("==========================================");
    println!();

    let graph = match build_family_tree() {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Failed to build demo graph: {} ({})", e, e.code());
            std::process::exit(1);
        }
    };

    println!("Graph Statistics:");
    println!("  Total vertices: {}", graph.vertex_count());
    println!("  Total edges: {}", graph.edge_count());
    println!();

    demo_traversal(&graph);
    demo_snapshot(&graph);
}

fn build_family_tree() -> GraphResult<Graph> {
    let mut graph = Graph::new();

    let mut people = Vec::new();
    for (name, gender) in [
        ("John Doe", "m"),
        ("Jane Doe", "f"),
        ("James Doe", "m"),
        ("Martha Doe", "f"),
        ("Markus Dough", "m"),
        ("Linda Dough", "f"),
    ] {
        let id = graph.create_vertex("PERSON", Some(props! { "name" => name, "gender" => gender }))?;
        println!("✓ Created PERSON {} ({})", name, id);
        people.push(id);
    }

    for (husband, wife, year) in [(0, 1, 2014i64), (2, 3, 1989), (4, 5, 1965)] {
        graph.create_edge(
            "MARRIED",
            &people[husband],
            &people[wife],
            Some(props! { "year" => year }),
        )?;
    }
    for (child, parent) in [(0, 2), (0, 3), (3, 4), (3, 5)] {
        graph.create_edge("CHILDOF", &people[child], &people[parent], None)?;
    }

    Ok(graph)
}

fn demo_traversal(graph: &Graph) {
    println!("=== Traversal ===");

    let parents = graph
        .find_vertices("PERSON", Filter::property("name", "John Doe"))
        .over("CHILDOF", Filter::Any)
        .to("PERSON", Filter::Any)
        .get_all();
    println!("Parents of John Doe:");
    for parent in parents.iter() {
        if let Some(name) = parent.get_property("name") {
            println!("  - {}", name);
        }
    }

    let grandmothers = graph
        .find_vertices("PERSON", Filter::property("name", "John Doe"))
        .over("CHILDOF", Filter::Any)
        .to("PERSON", Filter::Any)
        .over("CHILDOF", Filter::Any)
        .to("PERSON", PropertyFilter::new().equals("gender", "f"))
        .get_all();
    println!("Grandmothers of John Doe:");
    for grandmother in grandmothers.iter() {
        if let Some(name) = grandmother.get_property("name") {
            println!("  - {}", name);
        }
    }
    println!();
}

fn demo_snapshot(graph: &Graph) {
    println!("=== Snapshot ===");

    let json = match graph.to_object().to_json() {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Snapshot encoding failed: {}", e);
            return;
        }
    };
    println!("Snapshot size: {} bytes", json.len());

    match GraphSnapshot::from_json(&json) {
        Ok(snapshot) => {
            let mut restored = Graph::new();
            restored.from_object(snapshot);
            println!(
                "Restored {} vertices and {} edges",
                restored.vertex_count(),
                restored.edge_count()
            );
        }
        Err(e) => eprintln!("Snapshot decoding failed: {}", e),
    }
}
