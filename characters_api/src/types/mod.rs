mod character;
pub use self::character::{Ack, Character, NewCharacter};
