fn main() {
    println!("cargo:rerun-if-changed=schemas/teams.graphql");

    cynic_codegen::register_schema("teams")
        .from_sdl_file("schemas/teams.graphql")
        .expect("teams schema must be readable")
        .as_default()
        .expect("teams schema must be registered");
}
