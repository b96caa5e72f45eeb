use pretty_assertions::assert_eq;
use shapegen::{translate, translate_to_json_schema, SchemaError, Target};

const USER_SHAPE: &str = include_str!("../../demos/user.shape");
const USER_AJV:   &str = include_str!("../../demos/user.ajv.js");

const USER_ONE_LINE: &str =
    "User { id: Integer, name: String & min(3) & max(50), email: String & email, tags?: [String] }";

#[test]
fn test_ajv_matches_sample_artifact() {
    let code = translate(USER_SHAPE, Target::Ajv).unwrap();
    assert_eq!(code, USER_AJV);
}

#[test]
fn test_single_line_form_matches_multiline_form() {
    for target in Target::ALL {
        assert_eq!(
            translate(USER_ONE_LINE, target).unwrap(),
            translate(USER_SHAPE, target).unwrap()
        );
    }
}

#[test]
fn test_every_target_lists_fields_in_order() {
    for target in Target::ALL {
        let code = translate(USER_SHAPE, target).unwrap();
        let positions: Vec<usize> = ["id", "name", "email", "tags"]
            .iter()
            .map(|field| {
                let key = match target {
                    Target::Ajv => format!("\"{}\": {{", field),
                    _ => format!("  {}: ", field),
                };
                code.find(&key).unwrap_or_else(|| panic!("{} missing in {} output", field, target))
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted, "{} output is out of order", target);
    }
}

#[test]
fn test_only_tags_is_optional_in_each_polarity() {
    let zod = translate(USER_SHAPE, Target::Zod).unwrap();
    let optional: Vec<&str> = zod.lines().filter(|l| l.ends_with(".optional(),")).collect();
    assert_eq!(optional, vec!["  tags: z.array(z.string()).optional(),"]);

    let joi = translate(USER_SHAPE, Target::Joi).unwrap();
    let unmarked: Vec<&str> = joi
        .lines()
        .filter(|l| l.starts_with("  ") && !l.ends_with(".required(),"))
        .collect();
    assert_eq!(unmarked, vec!["  tags: Joi.array().items(Joi.string()),"]);

    let schema: serde_json::Value =
        serde_json::from_str(&translate_to_json_schema(USER_SHAPE).unwrap()).unwrap();
    assert_eq!(schema["required"], serde_json::json!(["id", "name", "email"]));
}

#[test]
fn test_json_schema_shape() {
    let schema: serde_json::Value =
        serde_json::from_str(&translate_to_json_schema(USER_SHAPE).unwrap()).unwrap();
    assert_eq!(schema["$schema"], "http://json-schema.org/draft-07/schema#");
    assert_eq!(schema["type"], "object");
    assert_eq!(
        schema["properties"]["name"],
        serde_json::json!({ "type": "string", "minLength": 3, "maxLength": 50 })
    );
    assert_eq!(
        schema["properties"]["email"],
        serde_json::json!({ "type": "string", "format": "email" })
    );
}

#[test]
fn test_missing_closing_brace() {
    let err = translate("User {\n  id: Integer\n", Target::Zod).unwrap_err();
    assert!(matches!(err, SchemaError::InvalidDeclaration));
}
