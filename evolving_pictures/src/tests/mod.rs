mod common;

mod test_breed;
