//! Defining a new record type with the transformer building blocks

use serde_json::json;
use tmaparse_core::transformers::{boolean, date, integer, object, search_params, string};
use tmaparse_core::{
    create_transformer_gen, FromRecord, Record, Result, Schema, TransformerGen,
};

#[derive(Debug)]
#[allow(dead_code)]
struct Invoice {
    id: i64,
    title: String,
    paid: Option<bool>,
    created_at: chrono::DateTime<chrono::Utc>,
    payer: Option<Payer>,
}

#[derive(Debug)]
#[allow(dead_code)]
struct Payer {
    user_id: i64,
    display_name: String,
}

impl FromRecord for Invoice {
    fn from_record(mut record: Record) -> Result<Self> {
        Ok(Self {
            id: record.take("id")?,
            title: record.take("title")?,
            paid: record.take("paid")?,
            created_at: record.take("createdAt")?,
            payer: record.take("payer")?,
        })
    }
}

impl FromRecord for Payer {
    fn from_record(mut record: Record) -> Result<Self> {
        Ok(Self {
            user_id: record.take("userId")?,
            display_name: record.take("displayName")?,
        })
    }
}

fn invoice() -> TransformerGen<Invoice> {
    create_transformer_gen("Invoice", |value| {
        let payer = Schema::builder("Payer")
            .field("userId", integer())
            .field("displayName", string())
            .build()?;

        // `createdAt` reads `created_at`; `title` reads an explicit key
        let schema = Schema::builder("Invoice")
            .field("id", integer())
            .field_from("title", "invoice_title", string())
            .field("paid", boolean().optional())
            .field("createdAt", date())
            .field("payer", object::<Payer>(payer).optional())
            .build()?;

        search_params::<Invoice>(schema).parse(value)
    })
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("tmaparse Custom Schema Example\n");

    let from_query = invoice().parse(
        "id=42&invoice_title=Coffee&paid=true&created_at=1700000000\
         &payer=%7B%22user_id%22%3A7%2C%22display_name%22%3A%22Ann%22%7D",
    )?;
    println!("From query:  {:?}", from_query);

    let from_object = invoice().parse(json!({
        "id": 43,
        "invoice_title": "Tea",
        "created_at": 1700000100
    }))?;
    println!("From object: {:?}", from_object);

    for bad in ["id=1&invoice_title=x&created_at=-5", "id=1&created_at=1", "id=1&invoice_title=x&created_at=1&paid=yes"] {
        match invoice().parse(bad) {
            Ok(v) => println!("Unexpectedly valid: {:?}", v),
            Err(e) => println!("{:<44} -> [{}] {}", bad, e.kind().code(), e),
        }
    }

    Ok(())
}
