fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate gRPC server code from proto files
    tonic_build::configure()
        .build_server(true)
        .build_client(false)
        .compile(
            &[
                "../proto/common.proto",
                "../proto/auth.proto",
                "../proto/product.proto",
            ],
            &["../proto"],
        )?;

    Ok(())
}
