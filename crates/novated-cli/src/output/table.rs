use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as a table using the tabled crate.
///
/// A full comparison prints a three-row scenario summary followed by the
/// per-scenario breakdowns; anything else falls back to a field/value table.
pub fn print_table(value: &Value) {
    if let Some(result) = super::comparison_result(value) {
        print_comparison(result);
        print_envelope_trailer(value);
        return;
    }

    if value.get("scenario").is_some() {
        print_projection(value);
        return;
    }

    print_flat_object(value);
}

fn print_comparison(result: &Value) {
    let mut builder = Builder::default();
    builder.push_record(["Scenario", "Monthly", "Total"]);

    for key in ["lease", "outright", "loan"] {
        if let Some(Value::Object(scenario)) = result.get(key) {
            builder.push_record([
                key.to_string(),
                field_string(scenario, "monthly"),
                field_string(scenario, "total"),
            ]);
        }
    }
    println!("{}", Table::from(builder));

    if let Some(Value::String(best)) = result.get("best_option") {
        println!("\nBest option: {}", best);
    }

    for key in ["lease", "outright", "loan"] {
        if let Some(Value::Object(scenario)) = result.get(key) {
            if let Some(Value::Object(details)) = scenario.get("details") {
                println!("\n{} breakdown:", key);
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                for (field, val) in details {
                    builder.push_record([field.clone(), format_value(val)]);
                }
                println!("{}", Table::from(builder));
            }
        }
    }
}

fn print_projection(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["monthly".to_string(), field_string(map, "monthly")]);
        builder.push_record(["total".to_string(), field_string(map, "total")]);
        if let Some(Value::Object(details)) = map.get("details") {
            for (field, val) in details {
                builder.push_record([field.clone(), format_value(val)]);
            }
        }
        println!("{}", Table::from(builder));
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.clone(), format_value(val)]);
        }
        println!("{}", Table::from(builder));
    } else {
        println!("{}", value);
    }
}

fn print_envelope_trailer(value: &Value) {
    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }
    if let Some(Value::String(meth)) = value.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn field_string(map: &serde_json::Map<String, Value>, key: &str) -> String {
    map.get(key).map(format_value).unwrap_or_default()
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
