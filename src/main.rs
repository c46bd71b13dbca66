// ==========================================
// 供应商台账管理系统 - Tauri 主入口
// ==========================================
// 技术栈: Tauri + Rust
// ==========================================

// 禁止控制台窗口 (Windows)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(feature = "tauri-app")]
fn main() {
    use vendor_console::app::tauri_commands::*;
    use vendor_console::app::AppState;

    // 初始化日志系统
    vendor_console::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", vendor_console::APP_NAME);
    tracing::info!("系统版本: {}", vendor_console::VERSION);
    tracing::info!("==================================================");

    // 创建AppState（内存后端; 接入真实服务时替换 AppState::new 的客户端）
    tracing::info!("正在初始化AppState...");
    let app_state = AppState::with_in_memory();
    tracing::info!("AppState初始化成功");
    tracing::info!("启动Tauri应用...");

    // 启动Tauri应用
    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // ==========================================
            // 供应商列表与表单相关命令 (10个)
            // ==========================================
            list_vendors,
            open_vendor_form,
            open_vendor_edit,
            edit_vendor_field,
            close_vendor_form,
            submit_vendor_form,
            delete_current_vendor,
            get_form_state,
            get_page_error,
            dismiss_page_error,

            // ==========================================
            // 导入导出相关命令 (3个)
            // ==========================================
            import_vendor_file,
            export_vendor_template,
            export_vendor_data,
        ])
        .run(tauri::generate_context!())
        .expect("启动Tauri应用失败");

    tracing::info!("Tauri应用已退出");
}

#[cfg(not(feature = "tauri-app"))]
fn main() {
    println!("==================================================");
    println!("{}", vendor_console::APP_NAME);
    println!("系统版本: {}", vendor_console::VERSION);
    println!("==================================================");
    println!();
    println!("此可执行文件需要启用 tauri-app 特性");
    println!("使用: cargo run --features tauri-app");
    println!();
    println!("或者使用库模式:");
    println!("use vendor_console::app::AppState;");
}
