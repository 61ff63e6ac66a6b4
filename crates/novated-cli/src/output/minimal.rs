use serde_json::Value;

/// Print just the key answer value from the output.
///
/// A full comparison reduces to the best option; a single projection to its
/// monthly cost; a payment lookup to the payment.
pub fn print_minimal(value: &Value) {
    if let Some(result) = super::comparison_result(value) {
        if let Some(best) = result.get("best_option") {
            println!("{}", format_minimal(best));
            return;
        }
    }

    let priority_keys = ["monthly", "payment", "total"];
    if let Value::Object(map) = value {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(value));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
