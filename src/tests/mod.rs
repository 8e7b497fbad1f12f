mod cursor;
mod expr;
