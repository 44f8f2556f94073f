#[cfg(test)]
mod showcase;
