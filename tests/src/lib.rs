#[cfg(test)]
mod ordering;
