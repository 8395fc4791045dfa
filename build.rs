fn main() {
    // Emits OUT_DIR/built.rs; GIT_COMMIT_HASH feeds the long `--version` string.
    built::write_built_file().expect("Failed to acquire build-time information");
}
