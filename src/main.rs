#[cfg(target_arch = "wasm32")]
mod app_runtime;
#[cfg(target_arch = "wasm32")]
mod boot;
#[cfg(target_arch = "wasm32")]
mod boot_runtime;
#[cfg(target_arch = "wasm32")]
mod contact_runtime;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod effects;
#[cfg(target_arch = "wasm32")]
mod form;
#[cfg(target_arch = "wasm32")]
mod indicator;
#[cfg(target_arch = "wasm32")]
mod storage;

fn main() {
    #[cfg(target_arch = "wasm32")]
    boot::start();
}
