use strain_triage_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("strain-triage error: {err}");
        std::process::exit(1);
    }
}
