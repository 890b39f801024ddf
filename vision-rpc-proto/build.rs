use ttrpc_codegen::{Codegen, Customize};

const PROTOS: &[&str] = &["protos/image_annotator.proto"];

fn main() {
    for proto in PROTOS {
        println!("cargo:rerun-if-changed={}", proto);
    }

    // Messages plus the blocking stub
    Codegen::new()
        .out_dir("src")
        .inputs(PROTOS)
        .include("protos")
        .rust_protobuf()
        .run()
        .expect("Failed to generate image annotator messages");

    // Async stub only, sharing the messages above
    Codegen::new()
        .out_dir("src/asynchronous")
        .inputs(PROTOS)
        .include("protos")
        .customize(Customize {
            async_all: true,
            ..Default::default()
        })
        .run()
        .expect("Failed to generate async image annotator stub");
}
