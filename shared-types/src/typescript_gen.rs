use ts_rs::TS;

/// Every wire type with a TypeScript binding, in dependency order
pub const EXPORTED_TYPES: &[&str] = &[
    "QuestionStatus",
    "ModelAnswer",
    "QuestionRecord",
    "QuestionRequest",
    "ErrorResponse",
    "HealthResponse",
    "User",
    "CommunityAnswer",
];

pub fn generate_typescript_definitions(
    type_names: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    if type_names.is_empty() {
        return Err("No type names provided".into());
    }

    let mut definitions = Vec::new();

    for name in type_names {
        let type_def = export_type(name)?;
        let cleaned = clean_type(type_def);

        if !cleaned.trim().is_empty() {
            definitions.push(cleaned);
        }
    }

    Ok(definitions.join("\n\n"))
}

fn export_type(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    use crate::*;

    let result = match name {
        "QuestionStatus" => QuestionStatus::export_to_string()?,
        "ModelAnswer" => ModelAnswer::export_to_string()?,
        "QuestionRecord" => QuestionRecord::export_to_string()?,
        "QuestionRequest" => QuestionRequest::export_to_string()?,
        "ErrorResponse" => ErrorResponse::export_to_string()?,
        "HealthResponse" => HealthResponse::export_to_string()?,
        "User" => User::export_to_string()?,
        "CommunityAnswer" => CommunityAnswer::export_to_string()?,
        _ => {
            return Err(format!(
                "Unknown type: '{}'. Available types: {}",
                name,
                EXPORTED_TYPES.join(", ")
            )
            .into());
        }
    };

    Ok(result)
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');
    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
        })
        .collect();

    filtered.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_single_type() {
        let result = generate_typescript_definitions(&["ModelAnswer"]).unwrap();
        assert!(result.contains("ModelAnswer"));
        assert!(result.contains("confidence: number"));
        assert!(result.contains("escalate_to_human: boolean"));
    }

    #[test]
    fn test_generate_all_types() {
        let result = generate_typescript_definitions(EXPORTED_TYPES).unwrap();
        for name in EXPORTED_TYPES {
            assert!(result.contains(name), "missing {}", name);
        }
        assert!(result.contains("isAccepted"));
    }

    #[test]
    fn test_unknown_type_error() {
        let result = generate_typescript_definitions(&["NonExistentType"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown type"));
    }

    #[test]
    fn test_empty_type_names() {
        let result = generate_typescript_definitions(&[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cleaned_output() {
        let result = generate_typescript_definitions(&["QuestionRecord"]).unwrap();
        assert!(!result.contains("import type"));
        assert!(!result.contains("This file was generated"));
    }
}
