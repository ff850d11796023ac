//! 桥接层
//!
//! | 扩展点 | 回调表 | 适配器 | 基类句柄 |
//! |--------|--------|--------|----------|
//! | 调试绘制 | `DrawCallbacks` | `DrawBridge` | `B2Draw` |
//! | 接触监听 | `ContactListenerCallbacks` | `ContactListenerBridge` | `B2ContactListener` |
//! | 区域查询 | `QueryCallbackCallbacks` | `QueryCallbackBridge` | `B2QueryCallback` |
//! | 射线检测 | `RayCastCallbackCallbacks` | `RayCastCallbackBridge` | `B2RayCastCallback` |
//! | 碰撞过滤 | `ContactFilterCallbacks` | `ContactFilterBridge` | `B2ContactFilter` |
//! | 销毁通知 | `DestructionListenerCallbacks` | `DestructionListenerBridge` | `B2DestructionListener` |

mod adapter;
mod guard;
pub mod lifecycle;

pub mod contact_filter;
pub mod contact_listener;
pub mod destruction_listener;
pub mod draw;
pub mod query_callback;
pub mod ray_cast_callback;

pub use adapter::{Bridge, CallbackTable, ExtensionKind, TraitDescriptor};
pub use guard::{guard, guard_with};
pub use lifecycle::{live_adapters, live_adapters_total, OwnedBridge};

pub use contact_filter::ContactFilterCallbacks;
pub use contact_listener::ContactListenerCallbacks;
pub use destruction_listener::DestructionListenerCallbacks;
pub use draw::DrawCallbacks;
pub use query_callback::QueryCallbackCallbacks;
pub use ray_cast_callback::RayCastCallbackCallbacks;

pub type DrawBridge = Bridge<DrawCallbacks>;
pub type ContactListenerBridge = Bridge<ContactListenerCallbacks>;
pub type QueryCallbackBridge = Bridge<QueryCallbackCallbacks>;
pub type RayCastCallbackBridge = Bridge<RayCastCallbackCallbacks>;
pub type ContactFilterBridge = Bridge<ContactFilterCallbacks>;
pub type DestructionListenerBridge = Bridge<DestructionListenerCallbacks>;

pub type DrawDescriptor = TraitDescriptor<DrawCallbacks>;
pub type ContactListenerDescriptor = TraitDescriptor<ContactListenerCallbacks>;
pub type QueryCallbackDescriptor = TraitDescriptor<QueryCallbackCallbacks>;
pub type RayCastCallbackDescriptor = TraitDescriptor<RayCastCallbackCallbacks>;
pub type ContactFilterDescriptor = TraitDescriptor<ContactFilterCallbacks>;
pub type DestructionListenerDescriptor = TraitDescriptor<DestructionListenerCallbacks>;
