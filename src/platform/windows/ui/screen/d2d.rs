//! Direct2D drawing target bound to a window.

use log::debug;
use windows::Win32::Foundation::{D2DERR_RECREATE_TARGET, HWND};
use windows::Win32::Graphics::Direct2D::Common::{
    D2D1_ALPHA_MODE_UNKNOWN, D2D1_COLOR_F, D2D1_PIXEL_FORMAT, D2D_SIZE_U,
};
use windows::Win32::Graphics::Direct2D::{
    D2D1CreateFactory, ID2D1Factory, ID2D1HwndRenderTarget, ID2D1SolidColorBrush,
    D2D1_ANTIALIAS_MODE_PER_PRIMITIVE, D2D1_ELLIPSE, D2D1_FACTORY_TYPE_SINGLE_THREADED,
    D2D1_FEATURE_LEVEL_DEFAULT, D2D1_HWND_RENDER_TARGET_PROPERTIES, D2D1_PRESENT_OPTIONS_NONE,
    D2D1_RENDER_TARGET_PROPERTIES, D2D1_RENDER_TARGET_TYPE_DEFAULT, D2D1_RENDER_TARGET_USAGE_NONE,
};
use windows::Win32::Graphics::Dxgi::Common::DXGI_FORMAT_UNKNOWN;
use windows_numerics::Vector2;

use crate::error::Result;
use crate::model::{Rgb, Size};
use crate::render::{DrawTarget, Presented};

const BLACK: D2D1_COLOR_F = D2D1_COLOR_F {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

fn color_f(c: Rgb) -> D2D1_COLOR_F {
    let (r, g, b) = c.to_f32();
    D2D1_COLOR_F { r, g, b, a: 1.0 }
}

/// GPU target. One solid brush is reused and recolored per star.
pub struct D2dTarget {
    hwnd: HWND,
    size: Size,
    factory: ID2D1Factory,
    target: Option<ID2D1HwndRenderTarget>,
    brush: Option<ID2D1SolidColorBrush>,
    drawing: bool,
}

impl D2dTarget {
    /// Create a factory and a render target for `hwnd`.
    pub fn new(hwnd: HWND, size: Size) -> Result<Self> {
        let factory: ID2D1Factory =
            unsafe { D2D1CreateFactory(D2D1_FACTORY_TYPE_SINGLE_THREADED, None)? };
        let mut target = Self {
            hwnd,
            size,
            factory,
            target: None,
            brush: None,
            drawing: false,
        };
        target.create()?;
        Ok(target)
    }

    fn create(&mut self) -> Result<()> {
        let size = self.size.at_least_one();
        // 96 DPI keeps one DIP equal to one pixel.
        let rt_props = D2D1_RENDER_TARGET_PROPERTIES {
            r#type: D2D1_RENDER_TARGET_TYPE_DEFAULT,
            pixelFormat: D2D1_PIXEL_FORMAT {
                format: DXGI_FORMAT_UNKNOWN,
                alphaMode: D2D1_ALPHA_MODE_UNKNOWN,
            },
            dpiX: 96.0,
            dpiY: 96.0,
            usage: D2D1_RENDER_TARGET_USAGE_NONE,
            minLevel: D2D1_FEATURE_LEVEL_DEFAULT,
        };
        let hwnd_props = D2D1_HWND_RENDER_TARGET_PROPERTIES {
            hwnd: self.hwnd,
            pixelSize: D2D_SIZE_U {
                width: size.width,
                height: size.height,
            },
            presentOptions: D2D1_PRESENT_OPTIONS_NONE,
        };

        unsafe {
            let rt = self.factory.CreateHwndRenderTarget(&rt_props, &hwnd_props)?;
            rt.SetAntialiasMode(D2D1_ANTIALIAS_MODE_PER_PRIMITIVE);
            let brush = rt.CreateSolidColorBrush(&color_f(Rgb::default()), None)?;
            self.target = Some(rt);
            self.brush = Some(brush);
        }
        Ok(())
    }
}

impl DrawTarget for D2dTarget {
    fn size(&self) -> Size {
        self.size
    }

    fn is_ready(&self) -> bool {
        self.target.is_some()
    }

    fn resize(&mut self, size: Size) -> Result<()> {
        self.release();
        self.size = size;
        self.create()
    }

    fn begin_frame(&mut self) {
        if let Some(rt) = &self.target {
            unsafe {
                rt.BeginDraw();
                rt.Clear(Some(&BLACK));
            }
            self.drawing = true;
        }
    }

    fn fill_ellipse(&mut self, x: f32, y: f32, radius: f32, color: Rgb) {
        if !self.drawing {
            return;
        }
        if let (Some(rt), Some(brush)) = (&self.target, &self.brush) {
            let ellipse = D2D1_ELLIPSE {
                point: Vector2::new(x, y),
                radiusX: radius,
                radiusY: radius,
            };
            unsafe {
                brush.SetColor(&color_f(color));
                rt.FillEllipse(&ellipse, brush);
            }
        }
    }

    fn present(&mut self) -> Result<Presented> {
        let Some(rt) = &self.target else {
            return Ok(Presented::TargetLost);
        };
        if !std::mem::take(&mut self.drawing) {
            return Ok(Presented::Shown);
        }
        match unsafe { rt.EndDraw(None, None) } {
            Ok(()) => Ok(Presented::Shown),
            Err(e) if e.code() == D2DERR_RECREATE_TARGET => {
                debug!("Direct2D target lost on window {:?}", self.hwnd);
                Ok(Presented::TargetLost)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn release(&mut self) {
        self.brush = None;
        self.target = None;
        self.drawing = false;
    }
}
