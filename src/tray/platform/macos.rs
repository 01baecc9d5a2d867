/// Hides the dock icon so the app lives only in the status bar.
pub fn hide_dock_icon() {
    use objc2::rc::Retained;
    use objc2::runtime::AnyObject;
    use objc2::{class, msg_send};

    // NSApplicationActivationPolicyAccessory
    const ACCESSORY: isize = 1;

    unsafe {
        let app: Retained<AnyObject> = msg_send![class!(NSApplication), sharedApplication];
        let _: bool = msg_send![&app, setActivationPolicy: ACCESSORY];
    }
}
