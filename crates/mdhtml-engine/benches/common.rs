// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** content and a [link](/to/page).\n\n- Bullet point\n- Another _item_\n\n1. First\n2. Second\n\n> Quoted\n> text\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_sectioned_document(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("## Section {}\n\n", section));
        content.push_str("Some paragraph content with `inline code` and an ![image](/img.png).\n\n");
        for i in 1..=3 {
            content.push_str(&format!("{}. Item {} in section {}\n", i, i, section));
        }
        content.push('\n');
    }

    content
}
