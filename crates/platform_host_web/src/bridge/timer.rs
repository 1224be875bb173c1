use super::interop;

pub(crate) async fn sleep_ms(delay_ms: u32) {
    interop::sleep_ms(delay_ms).await
}
