mod array;
mod object;
mod value;

pub use array::JsonArray;
pub use object::JsonObject;
pub use value::JsonValue;
