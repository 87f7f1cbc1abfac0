use vergen::EmitBuilder;

// Emits VERGEN_* build and git metadata logged at startup.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .all_build() // Build timestamp, used by telemetry::init_tracing
        .all_git() // Short sha; falls back to defaults outside a git checkout
        .emit()?;

    Ok(())
}
