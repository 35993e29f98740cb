//! Generated notes for the benches.

/// Daily-notes style document: roots cycle through seven weekday titles and
/// every root repeats the same `Tasks`/`Notes` subtree down to `depth`
/// levels, so most lines need a long chain and some cannot be addressed.
pub fn generate_notes(sections: usize, depth: usize) -> String {
    const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

    let mut md = String::from("---\ntitle: Bench notes\n---\n");
    let mut anchors = 0;
    for section in 0..sections {
        md.push_str(&format!("# {}\n", DAYS[section % DAYS.len()]));
        md.push_str("Summary of the day.\n");
        push_subtree(&mut md, 2, depth, &mut anchors);
    }
    md
}

fn push_subtree(md: &mut String, level: usize, depth: usize, anchors: &mut usize) {
    if level > depth + 1 || level > 6 {
        return;
    }
    let hashes = "#".repeat(level);
    for title in ["Tasks", "Notes"] {
        md.push_str(&format!("{hashes} {title}\n"));
        md.push_str("Prose under a repeated title.\n");
        if level == depth + 1 {
            *anchors += 1;
            md.push_str(&format!("Anchored line. ^a{anchors}\n"));
        }
        push_subtree(md, level + 1, depth, anchors);
    }
}
