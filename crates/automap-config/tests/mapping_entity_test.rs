//! Integration tests: configuring a single mapping.

mod common;

use automap_config::{
    AutoMapperConfig, ConfigRegistry, MemberOperation, Operation, OperationKind, Options,
    TransformFn,
};
use automap_ir::{Object, Value};
use common::{camel, config, schema, snake};
use std::sync::Arc;

fn user() -> Object {
    Object::new("User")
        .with_property("id", 7_i64)
        .with_property("email", "ada@example.com")
        .with_property("age", 36_i64)
        .with_property("first_name", "Ada")
}

#[test]
fn options_are_cloned_from_template_and_isolated() {
    let mut template = Options::new();
    template.skip_constructor();
    let mut config = AutoMapperConfig::with_default_options(schema(), template.clone());

    config.register_mapping("User", "UserDto");
    assert_eq!(
        config.get_mapping("User", "UserDto").unwrap().options(),
        template
    );

    // Template changes after construction do not reach existing mappings.
    config.default_options_mut().dont_skip_constructor();
    config
        .default_options_mut()
        .set_default_operation(Operation::ignore());
    let existing = config.get_mapping("User", "UserDto").unwrap().options();
    assert!(existing.should_skip_constructor());
    assert!(matches!(
        existing.default_operation().kind(),
        OperationKind::ConventionDefault
    ));

    // New mappings pick up the current template.
    config.register_mapping("UserDto", "User");
    assert_eq!(
        &config.get_mapping("UserDto", "User").unwrap().options(),
        config.default_options()
    );
}

#[test]
fn sibling_mappings_do_not_share_options() {
    let mut config = config();
    config.register_mapping("User", "UserDto").skip_constructor();
    config.register_mapping("UserDto", "User");

    assert!(config
        .get_mapping("User", "UserDto")
        .unwrap()
        .options()
        .should_skip_constructor());
    assert!(!config
        .get_mapping("UserDto", "User")
        .unwrap()
        .options()
        .should_skip_constructor());
    assert!(!config.default_options().should_skip_constructor());
}

#[test]
fn for_member_unknown_property_leaves_mapping_unchanged() {
    let mut config = config();
    let custom = Operation::map_from(|_| Ok(Value::from("x")));

    let err = config
        .register_mapping("User", "UserDto")
        .for_member("password", custom.clone())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Property 'password' does not exist on type User"
    );

    let mapping = config.get_mapping("User", "UserDto").unwrap();
    let fallback = mapping.mapping_operation_for("password");
    assert!(!fallback.same_rule(&custom));
    assert!(matches!(fallback.kind(), OperationKind::ConventionDefault));
    assert_eq!(mapping.registered_properties().count(), 0);
}

#[test]
fn for_member_error_propagates_with_question_mark() {
    fn configure(config: &mut AutoMapperConfig) -> automap_config::Result<()> {
        config
            .register_mapping("User", "UserDto")
            .for_member("email", Operation::ignore())?
            .for_member("nickname", Operation::ignore())?;
        Ok(())
    }

    let mut config = config();
    let err = configure(&mut config).unwrap_err();
    assert!(matches!(
        err,
        automap_config::Error::PropertyNotFound { ref property, .. } if property == "nickname"
    ));
    // Registrations before the failure are kept.
    assert!(config
        .get_mapping("User", "UserDto")
        .unwrap()
        .has_operation_for("email"));
}

#[test]
fn for_member_accepts_inherited_property() -> anyhow::Result<()> {
    let mut config = config();
    config
        .register_mapping("User", "UserDto")
        .for_member("id", Operation::ignore())?;

    assert!(config.get_mapping("User", "UserDto").unwrap().has_operation_for("id"));
    Ok(())
}

#[test]
fn registered_operation_is_returned_with_options() -> anyhow::Result<()> {
    let mut config = config();
    let ignore = Operation::ignore();
    let builder = config
        .register_mapping("User", "UserDto")
        .for_member("age", ignore.clone())?;

    let operation = builder.mapping_operation_for("age");
    assert!(operation.same_rule(&ignore));
    assert!(operation.has_options());
    assert!(Arc::ptr_eq(
        &operation.options().unwrap(),
        &builder.shared_options()
    ));
    Ok(())
}

#[test]
fn plain_transform_is_wrapped_as_custom() -> anyhow::Result<()> {
    let transform: TransformFn = Arc::new(|source: &Object| -> automap_config::Result<Value> {
        let age = source.get("age").cloned().unwrap_or(Value::Null).to_integer()?;
        Ok(Value::Integer(age + 1))
    });

    let mut config = config();
    let builder = config
        .register_mapping("User", "UserDto")
        .for_member("age", Arc::clone(&transform))?;

    let operation = builder.mapping_operation_for("age");
    assert!(operation.same_rule(&Operation::from(transform)));
    assert_eq!(operation.apply(&user(), "age")?, Some(Value::Integer(37)));
    Ok(())
}

#[test]
fn transform_value_errors_surface_from_apply() -> anyhow::Result<()> {
    let mut config = config();
    let builder = config.register_mapping("User", "UserDto").for_member(
        "email",
        MemberOperation::transform(|source| {
            let email = source.get("email").cloned().unwrap_or(Value::Null);
            Ok(Value::Integer(email.to_integer()?))
        }),
    )?;

    let err = builder
        .mapping_operation_for("email")
        .apply(&user(), "email")
        .unwrap_err();
    assert!(matches!(err, automap_config::Error::Value(_)));
    Ok(())
}

#[test]
fn user_to_dto_scenario() -> anyhow::Result<()> {
    let mut config = config();
    let email = Operation::map_from(|source| {
        Ok(Value::from(
            source
                .get("email")
                .and_then(Value::as_string)
                .unwrap_or_default()
                .to_uppercase(),
        ))
    });
    let mapping = config
        .register_mapping("User", "UserDto")
        .for_member("email", email.clone())?;

    let registered = mapping.mapping_operation_for("email");
    assert!(registered.same_rule(&email));
    assert_eq!(
        registered.apply(&user(), "email")?,
        Some(Value::from("ADA@EXAMPLE.COM"))
    );

    let first = mapping.mapping_operation_for("age");
    let second = mapping.mapping_operation_for("age");
    assert!(matches!(first.kind(), OperationKind::ConventionDefault));
    assert!(first.same_rule(&second));
    assert!(first.has_options() && second.has_options());
    assert_eq!(first.apply(&user(), "age")?, Some(Value::Integer(36)));
    Ok(())
}

#[test]
fn unmapped_lookups_are_independent_instances() {
    let mut config = config();
    let builder = config.register_mapping("User", "UserDto");

    let mut age = builder.mapping_operation_for("age");
    let first_name = builder.mapping_operation_for("firstName");
    assert!(age.same_rule(&first_name));

    // Repointing one instance does not affect the other.
    let detached = automap_config::options::share(Options::new());
    age.set_options(&detached);
    assert!(!Arc::ptr_eq(
        &age.options().unwrap(),
        &first_name.options().unwrap()
    ));
    assert!(Arc::ptr_eq(
        &first_name.options().unwrap(),
        &builder.shared_options()
    ));
}

#[test]
fn with_default_operation_affects_later_lookups_only() {
    let mut config = config();
    let mut builder = config.register_mapping("User", "UserDto");

    let before = builder.mapping_operation_for("age");
    builder = builder.with_default_operation(Operation::ignore());
    let after = builder.mapping_operation_for("age");

    assert!(matches!(before.kind(), OperationKind::ConventionDefault));
    assert!(matches!(after.kind(), OperationKind::Ignore));
    assert!(after.has_options());
}

#[test]
fn skip_constructor_round_trip() {
    let mut config = config();
    let builder = config.register_mapping("User", "UserDto").skip_constructor();
    assert!(builder.options().should_skip_constructor());

    let builder = builder.dont_skip_constructor();
    assert!(!builder.options().should_skip_constructor());
}

#[test]
fn set_defaults_changes_options_in_bulk() {
    let mut config = config();
    let builder = config.register_mapping("User", "UserDto").set_defaults(|options| {
        options.skip_constructor();
        options.set_source_naming_convention(snake());
        options.set_destination_naming_convention(camel());
    });

    let options = builder.options();
    assert!(options.should_skip_constructor());
    assert!(options.should_convert_name());
}

#[test]
fn convention_default_uses_mapping_naming_conventions() -> anyhow::Result<()> {
    let mut config = config();
    let builder = config
        .register_mapping("User", "UserDto")
        .with_naming_conventions(snake(), camel());

    let operation = builder.mapping_operation_for("firstName");
    assert_eq!(
        operation.apply(&user(), "firstName")?,
        Some(Value::from("Ada"))
    );
    Ok(())
}

#[test]
fn registry_trait_exposes_template_and_schema() {
    let config = config();
    assert_eq!(config.default_options(), &Options::default());
    assert!(config.property_schema().has_property("User", "first_name"));
}
