use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata for `push-notify --version`
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
