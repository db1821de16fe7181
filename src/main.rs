use torus::{build_client, RequestContext, TorusConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Reads TORUS_BEARER_TOKEN, TORUS_PUBLIC_KEY and optionally TORUS_SANDBOX / TORUS_BASE_URL
    let config = TorusConfig::from_env("TORUS")?;
    let client = build_client(config)?;

    let ctx = RequestContext::with_generated_request_id();

    println!("Fetching supported banks...");
    match client.get_banks(&ctx).await {
        Ok(banks) => {
            println!("Found {} banks", banks.len());
            for bank in banks.iter().take(5) {
                println!("Bank: {} ({})", bank.name, bank.code);
            }
        }
        Err(e) => {
            println!("Error fetching banks: {}", e);
        }
    }

    println!("Fetching yield offerings...");
    match client.get_all_yield_profiles(&ctx).await {
        Ok(profiles) => {
            for profile in &profiles {
                println!(
                    "Offering: {} ({}) at {}% APY",
                    profile.name, profile.currency, profile.apy_rate
                );
            }
        }
        Err(e) => {
            println!("Error fetching yield offerings: {}", e);
        }
    }

    // Example deposit (commented out for safety)
    /*
    let deposit = InitiateDepositRequest {
        customer_id: "customer-uuid".to_string(),
        reference: uuid::Uuid::new_v4().to_string(),
        amount: 100.0,
        yield_offering_id: "yield-offering-uuid".to_string(),
    };

    match client.initiate_deposit(&ctx, &deposit).await {
        Ok(deposit) => println!("Deposit created: {:?}", deposit),
        Err(e) => println!("Error creating deposit: {}", e),
    }
    */

    Ok(())
}
