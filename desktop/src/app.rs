//! デスクトップビューア
//!
//! 1画面構成: 写真を選ぶ → バックグラウンドで分類 → 結果テキストを表示。

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

use eframe::egui;

use office_ai_common::{ClassificationResult, ClassifierError, DisplayText};

use crate::io::classify_via_cli;
use crate::model::AppState;

/// バックグラウンドスレッドからのメッセージ
enum UiMessage {
    ClassifyDone {
        path: PathBuf,
        result: ClassificationResult,
        preview: Option<PreviewData>,
    },
}

/// プレビュー画像のRGBAピクセル
struct PreviewData {
    size: [usize; 2],
    pixels: Vec<u8>,
}

pub struct DesktopApp {
    state: AppState,
    status: String,
    preview: Option<egui::TextureHandle>,
    pending_preview: Option<PreviewData>,
    classify_tx: Sender<UiMessage>,
    classify_rx: Receiver<UiMessage>,
    classifying: bool,
}

impl Default for DesktopApp {
    fn default() -> Self {
        let (tx, rx) = channel();
        Self {
            state: AppState::default(),
            status: String::new(),
            preview: None,
            pending_preview: None,
            classify_tx: tx,
            classify_rx: rx,
            classifying: false,
        }
    }
}

impl DesktopApp {
    /// ファイルダイアログで写真を選び、分類を開始する
    fn open_photo(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Images", &["jpg", "jpeg", "png"])
            .pick_file();
        if let Some(path) = picked {
            self.classify(path);
        }
    }

    /// 分類をバックグラウンドで実行する
    ///
    /// 前回の結果は破棄する。選択ごとに1回だけ分類する。
    fn classify(&mut self, path: PathBuf) {
        self.state = AppState::default();
        self.state.photo_path = Some(path.clone());
        self.preview = None;
        self.status = "分類中...".to_string();
        self.classifying = true;

        let tx = self.classify_tx.clone();
        std::thread::spawn(move || {
            let preview = load_preview(&path);
            let result = match classify_via_cli(&path) {
                Ok(report) => report.result(),
                Err(e) => {
                    log::warn!("CLI連携失敗: {}", e);
                    Err(ClassifierError::FailedToClassifyImage)
                }
            };
            let _ = tx.send(UiMessage::ClassifyDone {
                path,
                result,
                preview,
            });
        });
    }

    fn poll_messages(&mut self) {
        while let Ok(message) = self.classify_rx.try_recv() {
            match message {
                UiMessage::ClassifyDone {
                    path,
                    result,
                    preview,
                } => {
                    // 待っている間に別の写真が選ばれていたら古い結果は捨てる
                    if self.state.photo_path.as_deref() != Some(path.as_path()) {
                        continue;
                    }
                    self.state.result = result;
                    self.pending_preview = preview;
                    self.classifying = false;
                    self.status = String::new();
                }
            }
        }
    }

    fn process_pending_preview(&mut self, ctx: &egui::Context) {
        if let Some(data) = self.pending_preview.take() {
            let image = egui::ColorImage::from_rgba_unmultiplied(data.size, &data.pixels);
            self.preview = Some(ctx.load_texture("photo-preview", image, Default::default()));
        }
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.classifying {
            ctx.request_repaint();
        }
        self.poll_messages();
        self.process_pending_preview(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Photo…").clicked() {
                        ui.close_menu();
                        self.open_photo();
                    }
                });
                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                if ui.button("Select a photo").clicked() {
                    self.open_photo();
                }
                ui.add_space(16.0);

                match &self.preview {
                    Some(texture) => {
                        ui.image((texture.id(), texture.size_vec2()));
                    }
                    None => {
                        if self.state.photo_path.is_some() {
                            ui.label("(no preview)");
                        }
                    }
                }

                ui.add_space(16.0);
                ui.label(self.state.result.display_text());
            });
        });
    }
}

/// プレビュー用サムネイルを読み込む（失敗しても分類は続行する）
fn load_preview(path: &std::path::Path) -> Option<PreviewData> {
    let bytes = std::fs::read(path).ok()?;
    let image = image::load_from_memory(&bytes).ok()?;
    let thumbnail = image.thumbnail(480, 360).to_rgba8();
    let size = [thumbnail.width() as usize, thumbnail.height() as usize];
    Some(PreviewData {
        size,
        pixels: thumbnail.into_raw(),
    })
}
