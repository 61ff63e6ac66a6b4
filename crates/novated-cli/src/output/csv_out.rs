use serde_json::Value;
use std::io;

/// Write output as CSV to stdout.
///
/// A full comparison produces one row per scenario; anything else falls
/// back to two-column field/value rows.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Some(result) = super::comparison_result(value) {
        let _ = wtr.write_record(["scenario", "monthly", "total"]);
        for key in ["lease", "outright", "loan"] {
            if let Some(Value::Object(scenario)) = result.get(key) {
                let _ = wtr.write_record([
                    key.to_string(),
                    field_string(scenario, "monthly"),
                    field_string(scenario, "total"),
                ]);
            }
        }
    } else if let Value::Object(map) = value {
        let _ = wtr.write_record(["field", "value"]);
        for (key, val) in map {
            if key == "details" {
                if let Value::Object(details) = val {
                    for (field, detail) in details {
                        let _ = wtr.write_record([field.clone(), format_csv_value(detail)]);
                    }
                    continue;
                }
            }
            let _ = wtr.write_record([key.clone(), format_csv_value(val)]);
        }
    } else {
        let _ = wtr.write_record([&format_csv_value(value)]);
    }

    let _ = wtr.flush();
}

fn field_string(map: &serde_json::Map<String, Value>, key: &str) -> String {
    map.get(key).map(format_csv_value).unwrap_or_default()
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
