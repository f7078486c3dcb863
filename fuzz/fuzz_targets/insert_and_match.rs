#![no_main]
use libfuzzer_sys::fuzz_target;
use pathtrie::{parse_pattern, split_path, Node, Params};

fuzz_target!(|data: (Vec<String>, String, bool)| {
    let (routes, path, strict) = data;
    let mut tree = Node::new();

    for route in &routes {
        let segments = parse_pattern(route);
        if strict {
            let _ = tree.try_insert(route, &segments);
        } else {
            tree.insert(route, &segments);
        }
    }

    let segments = split_path(&path);
    if let Some(node) = tree.search(&segments) {
        let pattern = node.pattern().expect("matched node without a route");
        let _ = Params::extract(&parse_pattern(pattern), &segments);
    }
});
