use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata backs `users --version`
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
