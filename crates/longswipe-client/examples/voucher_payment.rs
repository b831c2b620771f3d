//! End-to-end walkthrough of the Longswipe merchant API:
//! customer lifecycle, invoicing, and a voucher redemption flow.
//!
//! ```bash
//! export LONGSWIPE_API_KEY=your-api-key
//! export LONGSWIPE_SANDBOX=1
//! cargo run --example voucher_payment
//! ```

use longswipe_client::LongswipeClient;
use longswipe_core::{
    CreateCustomerParams, CreateInvoiceParams, FetchCustomerByEmailParams, FetchCustomersParams,
    InvoiceItem, UpdateCustomerParams, VoucherRedemptionParams,
};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let client = LongswipeClient::from_env()?;
    info!("Using base URL: {}", client.base_url());

    // 1. Create a new customer
    let customer = client
        .create_customer(&CreateCustomerParams {
            email: "john.doe@example.com".to_string(),
            name: "John Doe".to_string(),
        })
        .await?;
    info!("Customer created: {}", customer.message);

    // 2. Create an invoice
    let invoice = client
        .create_invoice(&CreateInvoiceParams {
            blockchain_network_id: "network-123".to_string(),
            currency_id: "USD".to_string(),
            due_date: "2025-03-26".to_string(),
            invoice_date: "2025-02-26".to_string(),
            invoice_items: vec![InvoiceItem {
                description: "Service payment".to_string(),
                quantity: 1,
                unit_price: 100.0,
            }],
            merchant_user_id: "merchant-123".to_string(),
        })
        .await?;
    info!("Invoice created: {}", invoice.message);

    // 3. Update the customer
    client
        .update_customer(&UpdateCustomerParams {
            id: "customer-123".to_string(),
            email: Some("john.updated@example.com".to_string()),
            name: Some("John Updated Doe".to_string()),
        })
        .await?;
    info!("Customer updated");

    // 4. Fetch customers
    let customers = client
        .fetch_customers(
            &FetchCustomersParams::default()
                .with_page(1)
                .with_limit(20)
                .with_search("john"),
        )
        .await?;
    info!("Customers fetched: {}", customers.message);

    // 5. Fetch customer by email
    client
        .fetch_customer_by_email(&FetchCustomerByEmailParams {
            email: "john.updated@example.com".to_string(),
        })
        .await?;
    info!("Customer fetched by email");

    // 6. Delete the customer
    client.delete_customer("customer-123").await?;
    info!("Customer deleted");

    // 7. Voucher redemption: inspect charges, then redeem with the
    //    same parameters
    let params = VoucherRedemptionParams::new("VOUCHER123", 1000, "USD")
        .with_lock_pin("1234")
        .with_wallet_address("0x123");

    let details = client.fetch_voucher_redemption_charges(&params).await?;
    info!("Voucher charges: {}", details.data);

    let receipt = client.process_voucher_payment(&params).await?;
    info!("Voucher redeemed: {}", receipt.message);

    Ok(())
}
