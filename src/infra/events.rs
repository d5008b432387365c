//! # Event Emitter Module / 事件发射器模块
//!
//! Thin typed publish channels the adapter fires into. Each emitter owns an
//! unbounded tokio channel; the host takes the receiving side exactly once
//! as its subscription view, and `dispose` drops the sender so the view
//! terminates. The adapter never owns subscriber logic.
//!
//! 适配器向其中发射事件的轻量类型化发布通道。每个发射器拥有一个无界的
//! tokio 通道；宿主只能取走一次接收端作为其订阅视图，`dispose` 会丢弃
//! 发送端使该视图终止。适配器从不拥有订阅者逻辑。

use std::sync::Mutex;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// A single-subscriber, typed event channel.
/// 单订阅者的类型化事件通道。
#[derive(Debug)]
pub struct EventEmitter<T> {
    tx: Mutex<Option<mpsc::UnboundedSender<T>>>,
    rx: Mutex<Option<mpsc::UnboundedReceiver<T>>>,
}

impl<T> EventEmitter<T> {
    /// Creates a fresh emitter with no subscriber attached yet.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx: Mutex::new(Some(tx)),
            rx: Mutex::new(Some(rx)),
        }
    }

    /// Fires an event into the channel. Events fired before a subscriber
    /// attaches are buffered; events fired after `dispose` are dropped
    /// silently, as are events fired after the subscriber went away.
    ///
    /// 向通道发射一个事件。在订阅者接入之前发射的事件会被缓冲；
    /// 在 `dispose` 之后发射的事件会被静默丢弃，订阅者消失后发射的事件同理。
    pub fn fire(&self, event: T) {
        if let Some(tx) = self.tx.lock().expect("emitter sender lock poisoned").as_ref() {
            let _ = tx.send(event);
        }
    }

    /// Takes the subscription-side view of the channel. Only the first call
    /// yields a stream; the emitter supports exactly one subscriber.
    ///
    /// 取走通道的订阅端视图。只有第一次调用会得到流；发射器只支持一个订阅者。
    pub fn subscribe(&self) -> Option<UnboundedReceiverStream<T>> {
        self.rx
            .lock()
            .expect("emitter receiver lock poisoned")
            .take()
            .map(UnboundedReceiverStream::new)
    }

    /// Releases the underlying channel. Any live subscription stream ends
    /// after draining what was already buffered.
    ///
    /// 释放底层通道。任何存活的订阅流会在排空已缓冲内容后结束。
    pub fn dispose(&self) {
        self.tx.lock().expect("emitter sender lock poisoned").take();
    }

    /// Whether `dispose` has been called.
    pub fn is_disposed(&self) -> bool {
        self.tx.lock().expect("emitter sender lock poisoned").is_none()
    }
}

impl<T> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}
