/*!
Configuration of a builder.

All configuration for a builder is contained within a [Config], fixed when the builder is made with [from_config](crate::builder::Builder::from_config).

```rust
# use otter_cnf::builder::Builder;
# use otter_cnf::config::Config;
# use otter_cnf::constraints;
let mut config = Config::default();
config.newline.set("\r\n".to_string());

let mut builder = Builder::from_config(config);
let p = builder.fresh_or_max_variable("p");
builder.add_comment("first\r\nsecond");
assert!(builder.add_clause_set(&constraints::or(&[p])).is_ok());

assert_eq!(builder.build(), "c first\r\nc second\r\np cnf 1 1\r\n1 0");
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The string used to split a comment into lines, and to join the lines of a written formula.
    pub newline: ConfigOption<String>,

    /// Write a comment line `c <number> <name>` for each numbered atom, after other comments.
    pub variable_names: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            newline: ConfigOption {
                name: "newline",
                value: "\n".to_string(),
            },

            variable_names: ConfigOption {
                name: "variable_names",
                value: false,
            },
        }
    }
}
