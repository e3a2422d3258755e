pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn banner_carries_message() {
        let b = types::Banner::new("registry up");
        assert_eq!(b.message, "registry up");
    }
}
