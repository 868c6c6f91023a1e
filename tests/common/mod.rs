use chrono::{Datelike, Months, Utc};
use std::io::Error;
use std::path::Path;

/// An expiration string `MM/YYYY` the given number of months from now.
pub fn expiry_months_ahead(months: u32) -> String {
    let date = Utc::now()
        .date_naive()
        .checked_add_months(Months::new(months))
        .unwrap();
    format!("{:02}/{:04}", date.month(), date.year())
}

pub fn write_orders_csv(path: &Path, rows: &[(u32, u32, &str)]) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["order", "customer", "total"])?;

    for &(order, customer, total) in rows {
        let order = order.to_string();
        let customer = customer.to_string();
        wtr.write_record([order.as_str(), customer.as_str(), total])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_purchases_csv(
    path: &Path,
    rows: &[(u32, &str, &str, &str, &str)],
) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["order", "number", "name", "expires", "ccv"])?;

    for &(order, number, name, expires, ccv) in rows {
        let order = order.to_string();
        wtr.write_record([order.as_str(), number, name, expires, ccv])?;
    }

    wtr.flush()?;
    Ok(())
}
