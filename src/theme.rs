//! Global styles for the demo form.

pub const GLOBAL_STYLES: &str = r#"
* { box-sizing: border-box; }

body {
    margin: 0;
    background: #f6f7f9;
    font-family: -apple-system, 'Segoe UI', Roboto, sans-serif;
    color: #1c1e21;
}

.demo-form {
    max-width: 440px;
    margin: 32px auto;
    padding: 24px;
    background: #ffffff;
    border-radius: 12px;
    box-shadow: 0 1px 4px rgba(0, 0, 0, 0.08);
    display: flex;
    flex-direction: column;
    gap: 20px;
}

.fk-field { position: relative; display: flex; flex-direction: column; gap: 6px; }
.fk-field--visa { gap: 2px; }

.fk-label { font-weight: 600; font-size: 14px; }
.fk-label--required::after { content: ' *'; color: #d33; }
.fk-label--inline { display: inline-block; font-size: 13px; }

.fk-input {
    height: 44px;
    padding: 0 10px;
    border: 1px solid #ccd0d5;
    border-radius: 10px;
    font-size: 15px;
    outline: none;
}
.fk-input:focus { border-color: #4a7dff; }
.fk-input--compact { height: 36px; border-radius: 6px; }

.fk-error { color: #d33; font-size: 13px; }
.fk-error--inline { display: inline; }

.fk-icon { position: absolute; right: 10px; top: 36px; cursor: pointer; font-size: 13px; }
.fk-icon--compact { top: 28px; }

.fk-tooltip { font-size: 12px; color: #667; }

.fk-phone-row { display: flex; align-items: center; gap: 8px; }
.fk-dial-code { font-size: 14px; color: #445; min-width: 36px; }

.fk-popup-overlay {
    position: fixed; inset: 0;
    background: rgba(0, 0, 0, 0.4);
    display: flex; align-items: center; justify-content: center;
    z-index: 20;
}
.fk-popup {
    position: relative;
    min-width: 320px;
    background: #ffffff;
    border-radius: 10px;
    padding: 28px 20px 20px;
    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.2);
}
.fk-popup-close { position: absolute; top: 8px; right: 12px; cursor: pointer; }
.fk-popup-message { margin: 0 0 16px; font-size: 15px; }
.fk-popup-actions { display: flex; justify-content: center; gap: 16px; }
.fk-popup-button {
    min-width: 110px; height: 38px;
    border: 1px solid #ccd0d5; border-radius: 8px;
    background: #ffffff; cursor: pointer;
}
.fk-popup-button--primary { background: #4a7dff; border-color: #4a7dff; color: #ffffff; }

.fk-select {
    display: flex; align-items: center; gap: 8px;
    height: 44px; padding: 0 10px;
    border: 1px solid #ccd0d5; border-radius: 10px;
    cursor: pointer; background: #ffffff;
}
.fk-select--disabled { background: #eef0f2; cursor: not-allowed; }
.fk-select-value { flex: 1; font-size: 15px; }
.fk-select-value--placeholder { color: #99a; }
.fk-select-menu {
    position: absolute; top: 100%; left: 0; right: 0;
    margin-top: 4px; padding: 6px;
    background: #ffffff;
    border: 1px solid #ccd0d5; border-radius: 10px;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.12);
    z-index: 10;
    max-height: 260px; overflow-y: auto;
}
.fk-select-search { width: 100%; height: 32px; margin-bottom: 6px; padding: 0 8px; }
.fk-select-group { font-size: 12px; color: #778; padding: 6px 8px 2px; text-transform: uppercase; }
.fk-select-option {
    display: flex; align-items: center; gap: 8px;
    padding: 8px; border-radius: 6px; cursor: pointer;
}
.fk-select-option:hover { background: #f0f4ff; }
.fk-select-option-icon { width: 18px; height: 18px; }
.fk-select-count { margin-left: auto; font-size: 12px; color: #778; }
.fk-select-loading { padding: 10px; color: #778; }

.fk-file-button {
    width: 100%; padding: 12px;
    border: 1px dashed #99a; border-radius: 10px;
    background: #fafbfc; cursor: pointer;
}
.fk-file-help { font-size: 12px; color: #778; }
.fk-file-list { margin: 4px 0 0; padding-left: 18px; font-size: 13px; }
"#;
