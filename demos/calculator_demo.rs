// ============================================================================
// Calculator Demonstration
// ============================================================================

use rnw_calc::document::{convert_document_to_markdown, write_sample_document};
use rnw_calc::prelude::*;

fn print_examples(op: Operation, title: &str, cases: &[(Number, Number)]) {
    println!("{} Examples:", title);
    for (a, b) in cases {
        match op.apply(*a, *b) {
            Ok(result) => println!("  {} {} {} = {:?}", a, op.symbol(), b, result),
            Err(e) => println!("  {} {} {} → Error: {}", a, op.symbol(), b, e),
        }
    }
    println!();
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let rule = "=".repeat(50);
    println!("{}", rule);
    println!("RNW Calculator Demonstration");
    println!("{}\n", rule);

    let int = Number::Int;
    let float = Number::Float;

    print_examples(
        Operation::Add,
        "Addition",
        &[(int(2), int(3)), (float(1.5), float(2.5)), (int(-1), int(1))],
    );
    print_examples(
        Operation::Subtract,
        "Subtraction",
        &[(int(5), int(3)), (float(1.5), float(2.5)), (int(0), int(5))],
    );
    print_examples(
        Operation::Multiply,
        "Multiplication",
        &[(int(3), int(4)), (float(2.5), int(2)), (int(-2), int(3))],
    );
    print_examples(
        Operation::Divide,
        "Division",
        &[(int(10), int(2)), (int(7), int(2)), (int(-6), int(3))],
    );
    print_examples(
        Operation::Power,
        "Power",
        &[(int(2), int(3)), (int(4), float(0.5)), (int(5), int(0))],
    );

    println!("Error Handling Example:");
    match divide(5, 0) {
        Ok(result) => println!("  5 ÷ 0 = {:?}", result),
        Err(e) => println!("  5 ÷ 0 → Error: {}", e),
    }
    println!();

    println!("Chained Operations Example:");
    println!("  Calculate: (2 + 3) × 4 ÷ 2");
    let step1 = add(2, 3);
    println!("    Step 1: 2 + 3 = {:?}", step1);
    let step2 = multiply(step1, 4);
    println!("    Step 2: {:?} × 4 = {:?}", step1, step2);
    match divide(step2, 2) {
        Ok(step3) => {
            println!("    Step 3: {:?} ÷ 2 = {:?}", step2, step3);
            println!("    Final result: {:?}", step3);
        },
        Err(e) => println!("    Step 3 failed: {}", e),
    }
    println!();

    println!("Document Conversion Example:");
    let dir = std::env::temp_dir().join("rnw-calc-demo");
    match write_sample_document(&dir) {
        Ok(path) => {
            let result = convert_document_to_markdown(&path);
            println!("  File: {}", result.file_path);
            println!("  Success: {}", result.success);
            println!("  Title: {}", result.title.as_deref().unwrap_or("-"));
            if let Some(content) = &result.content {
                println!("  Content length: {} characters", content.chars().count());
            }
            if let Err(e) = std::fs::remove_file(&path) {
                tracing::warn!(path = %path.display(), error = %e, "Could not remove sample document");
            }
        },
        Err(e) => println!("  Could not write sample document: {}", e),
    }

    let missing = convert_document_to_markdown(dir.join("missing.md"));
    println!(
        "  Missing file → success: {}, error: {}",
        missing.success,
        missing.error.as_deref().unwrap_or("-")
    );
    // Fails harmlessly if anything else lives in the directory
    let _ = std::fs::remove_dir(&dir);
    println!();

    println!("{}", rule);
    println!("Demonstration complete!");
    println!("Run 'cargo test' to execute the test suite.");
    println!("{}", rule);
}
