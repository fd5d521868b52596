use super::{message_def, message_name};
use crate::{
    attribute::Attribute,
    comment::comment,
    error::{bug, Bug},
    identifier::schema_field_name,
    metadata::rpc_tag,
    r#type::{Object, Type, Types, UserTypeId},
    scope::NameScope,
};
use std::fmt::Write;

/// Printer writes proto message definitions into an internal buffer
pub struct Printer<'a> {
    /// The internal buffer used to build the definitions
    buffer: String,

    /// The type graph being printed
    types: &'a Types,

    /// Scope used to compute message names
    scope: &'a NameScope,

    /// The indent level, in tabs
    indent: usize,
}

/// write! wrapper that indents and writes a line to the printer buffer
macro_rules! writeln {
    ($printer:ident, $v:expr) => {{
        for _ in 0..$printer.indent {
            $printer.buffer.push('\t');
        }

        $printer.buffer.push_str($v);
        $printer.buffer.push('\n');
    }};
    ($printer:ident, $($arg:tt)*) => {{
        for _ in 0..$printer.indent {
            $printer.buffer.push('\t');
        }

        write!(&mut $printer.buffer, $($arg)*).expect("Not written");
        $printer.buffer.push('\n')
    }};
}

impl<'a> Printer<'a> {
    /// Create a new printer
    pub fn new(types: &'a Types, scope: &'a NameScope) -> Self {
        Self {
            buffer: String::new(),
            types,
            scope,
            indent: 0,
        }
    }

    /// Write the given messages separated by blank lines
    pub fn write_messages(&mut self, ids: impl IntoIterator<Item = UserTypeId>) {
        for (i, id) in ids.into_iter().enumerate() {
            if i > 0 {
                self.buffer.push('\n');
            }
            self.write_message(id);
        }
    }

    /// Write a `message Name { ... }` block
    pub fn write_message(&mut self, id: UserTypeId) {
        let types = self.types;
        let ut = types.get(id);
        if let Some(description) = &ut.attribute.description {
            for line in comment(description) {
                writeln!(self, line.as_str());
            }
        }

        let name = message_name(types, &Attribute::new(id), self.scope);
        match &ut.attribute.ty {
            Type::Object(obj) => {
                self.buffer.push_str("message ");
                self.buffer.push_str(&name);
                self.write_body(obj);
                self.buffer.push('\n');
            }
            other => bug(Bug::NotMessage(other.kind())),
        }
    }

    /// Write the message body, from " {" to "}" without trailing newline
    pub fn write_body(&mut self, obj: &Object) {
        self.buffer.push_str(" {\n");
        self.indent += 1;
        for nat in obj.iter() {
            let attr = &nat.attribute;
            if let Some(description) = &attr.description {
                for line in comment(description) {
                    writeln!(self, line.as_str());
                }
            }

            writeln!(
                self,
                "{} {} = {};",
                message_def(self.types, attr, self.scope),
                schema_field_name(attr, &nat.name),
                rpc_tag(&nat.name, &attr.meta)
            );
        }
        self.indent -= 1;
        self.buffer.push('}');
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}
