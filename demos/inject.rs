use param_inject::{Args, Bound, Callable, Function, Injector, Signature, Value};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), param_inject::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parameters are read once, here; calls below never touch the file.
    let connect = Injector::new(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/config.yaml"))
        .with_key("service.http")
        .with_parameters("host, port, retries")
        .build()?
        .decorate(
            Function::new(
                "connect",
                Signature::new()
                    .required("service")
                    .optional("host", "localhost")
                    .optional("port", 80)
                    .optional("retries", 0),
                |args: &Bound| -> Result<String, param_inject::CallError> {
                    Ok(format!(
                        "{} -> {}:{} (retries={})",
                        args.get_as::<String>("service")?,
                        args.get_as::<String>("host")?,
                        args.get_as::<u16>("port")?,
                        args.get_as::<u32>("retries")?,
                    ))
                },
            )
            .with_doc("Describes a connection to a service endpoint."),
        );

    println!("{}: {}", connect.name(), connect.doc().unwrap_or_default());
    println!("{}", connect.call(Args::new().arg("billing"))??);
    println!(
        "{}",
        connect.call(Args::new().arg("billing").named("port", Value::from(9090)))??
    );

    Ok(())
}
