//! Validating constructor and setter arguments.
//!
//! The logging validators print a warning for every bad argument and let
//! the call proceed. Set `PARAM_TYPES_PROFILE=disabled` to turn them off:
//!
//! ```text
//! cargo run --example person
//! PARAM_TYPES_PROFILE=disabled cargo run --example person
//! ```

use param_types::prelude::*;
use std::fmt;

struct Person {
    firstname: String,
    lastname: String,
    age: Option<f64>,
    hobbies: Vec<String>,
}

struct PersonValidators {
    constructor: LoggingValidator,
    set_name: LoggingValidator,
}

impl PersonValidators {
    fn new(config: &ValidatorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            constructor: validate_with(
                config,
                "constructor",
                checkers![string(), number(), rest_of(string())],
            )?,
            set_name: validate_with(config, "setName", checkers![string()])?,
        })
    }
}

fn split_name(name: &Value) -> (String, String) {
    let text = name.to_string();
    let mut parts = text.splitn(2, ' ');
    let first = parts.next().unwrap_or_default().to_owned();
    let last = parts.next().unwrap_or_default().to_owned();
    (first, last)
}

impl Person {
    fn new(validators: &PersonValidators, args: &[Value]) -> Self {
        validators.constructor.call(args);

        let name = args.first().cloned().unwrap_or_default();
        let (firstname, lastname) = split_name(&name);
        let age = match args.get(1) {
            Some(Value::Number(age)) => Some(*age),
            _ => None,
        };
        let hobbies = args.iter().skip(2).map(ToString::to_string).collect();

        Self {
            firstname,
            lastname,
            age,
            hobbies,
        }
    }

    fn set_name(&mut self, validators: &PersonValidators, name: Value) {
        validators.set_name.call(std::slice::from_ref(&name));

        let (firstname, lastname) = split_name(&name);
        self.firstname = firstname;
        self.lastname = lastname;
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.firstname, self.lastname)?;
        if let Some(age) = self.age {
            write!(f, ", {age}")?;
        }
        if !self.hobbies.is_empty() {
            write!(f, ", likes {}", self.hobbies.join(" and "))?;
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_target(true).init();

    let config = ValidatorConfig::new().with_profile(BuildProfile::from_env());
    println!("build profile: {}", config.profile);
    let validators = PersonValidators::new(&config)?;

    let mut shin = Person::new(
        &validators,
        &args!["Shin Lu", 18, "movie", "reading", "programming"],
    );
    shin.set_name(&validators, Value::from("Something Else"));
    println!("{shin}");

    // Both calls below log a warning and carry on.
    let odd = Person::new(&validators, &args!["Shin Lu", "18", "movie", 42]);
    println!("{odd}");
    shin.set_name(&validators, Value::from(vec!["Some", "One"]));

    let strict = validate_with_errors_with(&config, "setName", checkers![string().required()])?;
    if let Err(error) = strict.call(&args![]) {
        println!("rejected: {error}");
    }

    Ok(())
}
