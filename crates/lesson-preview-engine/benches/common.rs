// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_lesson_content(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str("Deploy the contract with **care** and read the *docs*.\n");
        content.push_str("- Compile with `solc`\n- Run the tests\n\n");
        content.push_str("> **Tip:** keep functions small\n\n");
        content.push_str("[![Walkthrough](https://img.example/t.png)](https://video.example/v)\n\n");
        content.push_str("```solidity\n");
        content.push_str(&generate_solidity_source(2));
        content.push_str("\n```\n\n");
    }

    content
}

#[allow(dead_code)]
pub fn generate_solidity_source(functions: usize) -> String {
    let mut source = String::from("pragma solidity ^0.8.0;\n\ncontract Bench {\n");

    for i in 0..functions {
        source.push_str(&format!(
            "    // returns a constant\n    function f{i}() public pure returns (uint256) {{\n        string memory s = \"value {i}\";\n        return {i} * 1 ether;\n    }}\n"
        ));
    }

    source.push('}');
    source
}
