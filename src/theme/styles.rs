//! Global CSS styles for the portfolio site.
//!
//! Dark slate base with a single indigo accent.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --bg: #0b0d12;
  --bg-raised: #11141b;
  --card: rgba(22, 26, 36, 0.6);
  --border: #232836;

  /* Accent */
  --primary: #6d7cff;
  --primary-soft: rgba(109, 124, 255, 0.15);
  --primary-glow: rgba(109, 124, 255, 0.35);
  --on-primary: #ffffff;

  /* Text */
  --text-primary: #eef0f6;
  --text-secondary: rgba(238, 240, 246, 0.72);
  --text-muted: rgba(238, 240, 246, 0.5);

  /* Window dots */
  --dot-red: rgba(239, 68, 68, 0.7);
  --dot-yellow: rgba(234, 179, 8, 0.7);
  --dot-green: rgba(34, 197, 94, 0.7);

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-4xl: 2.5rem;
  --text-6xl: 3.75rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 200ms ease-out;
  --reveal-duration: 600ms;

  --radius-sm: 0.5rem;
  --radius-md: 0.75rem;
  --radius-lg: 1.5rem;
  --nav-height: 4rem;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

ul {
  list-style: none;
}

/* === Layout === */
.container {
  width: 100%;
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1.5rem;
  position: relative;
}

.section {
  position: relative;
  padding: 6rem 0;
  scroll-margin-top: var(--nav-height);
}

.narrow-2xl { max-width: 42rem; margin: 0 auto; }
.narrow-4xl { max-width: 56rem; margin: 0 auto; }
.narrow-5xl { max-width: 64rem; margin: 0 auto; }
.narrow-6xl { max-width: 72rem; margin: 0 auto; }
.narrow-7xl { max-width: 80rem; margin: 0 auto; }

.card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  padding: 1.5rem;
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.2);
}

.card-title {
  font-size: var(--text-xl);
  font-weight: 600;
  margin-bottom: 1rem;
}

.separator {
  border: none;
  border-top: 1px solid var(--border);
  margin: 1rem 0;
}

.chip-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.grow { flex: 1; }
.justify-start { justify-content: flex-start; }

.bullet {
  color: var(--primary);
  opacity: 0.7;
  flex-shrink: 0;
}

/* === Reveal === */
.reveal {
  opacity: 0;
  transform: translateY(16px);
  transition:
    opacity var(--reveal-duration) ease-out,
    transform var(--reveal-duration) ease-out;
  will-change: opacity, transform;
}

.reveal[data-inview="true"] {
  opacity: 1;
  transform: none;
}

@media (prefers-reduced-motion: reduce) {
  .reveal {
    opacity: 1;
    transform: none;
    transition: none;
  }

  .floaty,
  .spinner,
  .typing-cursor {
    animation: none !important;
  }
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.4rem;
  border-radius: var(--radius-md);
  border: 1px solid transparent;
  font-family: inherit;
  font-weight: 500;
  cursor: pointer;
  transition: all var(--transition-normal);
  white-space: nowrap;
}

.btn:disabled {
  opacity: 0.6;
  cursor: default;
}

.btn:not(:disabled):hover {
  transform: translateY(-2px);
}

.btn-sm { height: 2rem; padding: 0 0.75rem; font-size: var(--text-sm); }
.btn-md { height: 2.5rem; padding: 0 1.25rem; font-size: var(--text-sm); }
.btn-lg { height: 2.75rem; padding: 0 1.75rem; font-size: var(--text-base); }
.btn-icon { height: 2.25rem; width: 2.25rem; padding: 0; }

.btn-default {
  background: var(--primary);
  color: var(--on-primary);
  box-shadow: 0 1px 3px var(--primary-glow);
}

.btn-outline {
  background: transparent;
  border-color: var(--border);
  color: var(--text-primary);
}

.btn-outline:hover {
  border-color: var(--primary);
  background: var(--primary-soft);
}

.btn-ghost {
  background: transparent;
  color: var(--text-secondary);
}

.btn-ghost:hover {
  color: var(--text-primary);
  background: var(--primary-soft);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2rem;
  height: 2rem;
  border: none;
  border-radius: var(--radius-sm);
  background: transparent;
  color: var(--text-secondary);
  font-size: var(--text-xl);
  cursor: pointer;
  transition: color var(--transition-fast);
}

.icon-btn:hover {
  color: var(--text-primary);
}

/* === Badges & Chips === */
.badge {
  display: inline-flex;
  align-items: center;
  border-radius: 999px;
  padding: 0.15rem 0.65rem;
  font-size: var(--text-xs);
  font-weight: 500;
  flex-shrink: 0;
  text-transform: lowercase;
}

.badge-default { background: var(--primary); color: var(--on-primary); }
.badge-secondary { background: var(--primary-soft); color: var(--text-primary); }
.badge-outline { border: 1px solid var(--border); color: var(--text-secondary); }

.tech-chip {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
  border: 1px solid var(--border);
  background: var(--card);
  border-radius: 999px;
  padding: 0.25rem 0.75rem;
  font-size: var(--text-xs);
  color: var(--text-secondary);
  transition: border-color var(--transition-fast);
}

.tech-chip:hover {
  border-color: var(--primary);
}

.tech-chip-icon {
  color: var(--primary);
}

.tech-chip.overflow {
  color: var(--text-muted);
}

/* === Section Header === */
.section-header {
  margin-bottom: 3rem;
}

.section-header.align-center {
  text-align: center;
}

.section-header-title {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.align-center .section-header-title {
  justify-content: center;
}

.section-icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: var(--radius-md);
  background: var(--primary-soft);
  color: var(--primary);
  font-family: var(--font-mono);
  font-size: var(--text-sm);
}

.section-title {
  font-size: var(--text-4xl);
  font-weight: 700;
  letter-spacing: -0.02em;
}

.section-description {
  margin-top: 0.75rem;
  max-width: 42rem;
  color: var(--text-secondary);
  font-size: var(--text-lg);
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background: rgba(11, 13, 18, 0.5);
  backdrop-filter: blur(12px);
}

.navbar-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: var(--nav-height);
}

.navbar-name {
  font-size: var(--text-lg);
  font-weight: 600;
  transition: color var(--transition-fast);
}

.navbar-name:hover {
  color: var(--primary);
}

.navbar-links {
  display: flex;
  gap: 0.25rem;
}

.navbar-mobile-toggle,
.mobile-nav {
  display: none;
}

@media (max-width: 640px) {
  .navbar-links { display: none; }
  .navbar-mobile-toggle { display: flex; }
  .mobile-nav { display: block; }
}

.mobile-nav-overlay {
  position: fixed;
  inset: 0;
  z-index: 40;
  background: rgba(238, 240, 246, 0.08);
  backdrop-filter: blur(6px);
  visibility: hidden;
  opacity: 0;
  pointer-events: none;
  transition: visibility 200ms ease-out, opacity 200ms ease-out;
}

.mobile-nav-overlay.open {
  visibility: visible;
  opacity: 1;
  pointer-events: auto;
}

.mobile-nav-menu {
  position: fixed;
  left: 0.5rem;
  right: 0.5rem;
  top: 4.25rem;
  z-index: 50;
  display: flex;
  flex-direction: column;
  padding: 0.5rem 0;
  border: 1px solid var(--border);
  border-radius: var(--radius-sm);
  background: rgba(17, 20, 27, 0.85);
  backdrop-filter: blur(12px);
  visibility: hidden;
  opacity: 0;
  transform: scale(0.98);
  pointer-events: none;
  transition: all 200ms ease-out;
}

.mobile-nav-menu.open {
  visibility: visible;
  opacity: 1;
  transform: none;
  pointer-events: auto;
}

.mobile-nav-item {
  width: 100%;
  text-align: left;
  padding: 0.65rem 1rem;
  border: none;
  background: transparent;
  color: var(--text-primary);
  font: inherit;
  font-size: var(--text-sm);
  cursor: pointer;
  opacity: 0;
}

.mobile-nav-item:hover {
  background: var(--primary-soft);
}

.mobile-nav-item.slide-left { animation: slide-in-left 240ms ease-out forwards; }
.mobile-nav-item.slide-right { animation: slide-in-right 240ms ease-out forwards; }

@keyframes slide-in-left {
  from { opacity: 0; transform: translateX(-12px); }
  to { opacity: 1; transform: none; }
}

@keyframes slide-in-right {
  from { opacity: 0; transform: translateX(12px); }
  to { opacity: 1; transform: none; }
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding-top: var(--nav-height);
  overflow: hidden;
}

.hero-backdrop {
  position: absolute;
  inset: 0;
  z-index: -1;
  pointer-events: none;
  background: radial-gradient(ellipse 800px 600px at 50% -20%, var(--primary-soft), transparent 60%);
}

.hero-grid {
  display: grid;
  grid-template-columns: 1.1fr 0.9fr;
  gap: 3.5rem;
  align-items: center;
  max-width: 72rem;
  margin: 0 auto;
}

@media (max-width: 1024px) {
  .hero-grid { grid-template-columns: 1fr; gap: 2.5rem; }
}

.hero-name {
  font-size: var(--text-6xl);
  font-weight: 700;
  letter-spacing: -0.03em;
  line-height: 1.05;
}

.accent-gradient {
  background: linear-gradient(90deg, var(--primary), var(--primary), var(--text-primary));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-role {
  margin-top: 1rem;
  font-size: var(--text-xl);
  color: var(--text-secondary);
}

.hero-tagline {
  margin-top: 0.75rem;
  max-width: 36rem;
  font-size: var(--text-2xl);
  color: var(--text-primary);
}

.hero-copy .chip-row {
  margin-top: 1.5rem;
}

.hero-actions {
  margin-top: 2rem;
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
}

/* === Typing Text === */
.typing {
  display: inline-block;
  white-space: nowrap;
}

.typing-cursor {
  display: inline-block;
  margin-left: 1px;
  color: var(--primary);
  animation: blink 1s step-end infinite;
}

@keyframes blink {
  50% { opacity: 0; }
}

/* === Demo Card === */
.demo-card {
  border: 1px solid var(--border);
  background: var(--card);
  border-radius: var(--radius-lg);
  padding: 1.25rem;
}

.demo-card-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 0.75rem;
}

.window-dots {
  display: flex;
  gap: 0.5rem;
}

.dot {
  width: 0.625rem;
  height: 0.625rem;
  border-radius: 999px;
}

.dot-red { background: var(--dot-red); }
.dot-yellow { background: var(--dot-yellow); }
.dot-green { background: var(--dot-green); }

.demo-card-title {
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.demo-card-body {
  position: relative;
}

.floaty {
  animation: floaty 6s ease-in-out infinite;
}

@keyframes floaty {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-6px); }
}

.demo-run {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  z-index: 1;
}

.demo-terminal {
  overflow-x: auto;
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  background: rgba(11, 13, 18, 0.6);
  padding: 1rem 6rem 1rem 1rem;
  font-family: var(--font-mono);
  font-size: 12px;
  line-height: 1.25rem;
  color: var(--text-secondary);
  white-space: pre;
}

.api-request {
  transition: background-color var(--transition-normal);
  border-radius: 0.25rem;
}

.api-request-highlight {
  background: var(--primary-soft);
  color: var(--text-primary);
}

.api-response {
  animation: fade-in 200ms ease-out;
}

.api-placeholder {
  opacity: 0;
}

.api-processing {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  color: var(--text-muted);
}

.api-checkmark {
  display: inline-block;
  color: var(--dot-green);
  animation: pop 400ms ease-out;
}

.api-trace-pulse {
  animation: pulse 400ms ease-in-out;
  color: var(--primary);
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes pop {
  0% { transform: scale(0.6); }
  60% { transform: scale(1.25); }
  100% { transform: scale(1); }
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.45; }
}

.demo-card-caption {
  margin-top: 1rem;
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.spinner {
  display: inline-block;
  width: 1rem;
  height: 1rem;
  border: 2px solid var(--border);
  border-top-color: var(--primary);
  border-radius: 999px;
  animation: spin 800ms linear infinite;
}

.spinner.small {
  width: 0.75rem;
  height: 0.75rem;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === About === */
.about-grid {
  display: grid;
  grid-template-columns: 1.2fr 0.8fr;
  gap: 3.5rem;
  align-items: start;
}

@media (max-width: 1024px) {
  .about-grid { grid-template-columns: 1fr; }
}

.about-text p {
  font-size: var(--text-lg);
  color: var(--text-secondary);
  margin-bottom: 1.25rem;
}

.focus-item {
  margin-bottom: 1rem;
}

.focus-item h4 {
  font-size: var(--text-sm);
  font-weight: 600;
}

.focus-item p {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.focus-item.location {
  padding-top: 1rem;
}

/* === Projects === */
.projects-stack {
  display: flex;
  flex-direction: column;
  gap: 2.5rem;
}

.projects-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1.5rem;
}

@media (max-width: 768px) {
  .projects-grid { grid-template-columns: 1fr; }
}

.featured-glow {
  position: relative;
}

.project-card {
  height: 100%;
  display: flex;
  flex-direction: column;
  border: 1px solid var(--border);
  background: var(--card);
  border-radius: var(--radius-lg);
  padding: 1.5rem;
  transition: all var(--transition-normal);
}

.project-card:hover {
  transform: translateY(-4px);
  border-color: var(--primary-glow);
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.35);
}

.project-card-header {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 0.75rem;
  margin-bottom: 1rem;
}

.project-title {
  font-size: var(--text-xl);
  font-weight: 600;
  line-height: 1.2;
  transition: color var(--transition-fast);
}

.project-card.featured .project-title {
  font-size: var(--text-2xl);
}

.project-card:hover .project-title {
  color: var(--primary);
}

.project-description {
  margin-top: 0.25rem;
  color: var(--text-secondary);
}

.project-card-body {
  flex: 1;
  display: grid;
  gap: 1.5rem;
}

.project-card.featured .project-card-body {
  grid-template-columns: 1.2fr 0.8fr;
}

@media (max-width: 1024px) {
  .project-card.featured .project-card-body { grid-template-columns: 1fr; }
}

.project-card-main {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.project-long-description {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.project-card-aside {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.highlights-panel {
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  background: rgba(11, 13, 18, 0.3);
  padding: 1rem;
}

.highlights-title {
  font-size: var(--text-xs);
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--text-muted);
}

.highlights {
  margin-top: 0.75rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.highlights li,
.timeline-description li {
  display: flex;
  align-items: flex-start;
  gap: 0.5rem;
}

.project-links {
  display: flex;
  gap: 0.5rem;
}

.project-card-footer {
  margin-top: auto;
  padding-top: 1rem;
}

/* === Skills === */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1.5rem;
}

@media (max-width: 768px) {
  .skills-grid { grid-template-columns: 1fr; }
}

.skill-group {
  transition: all var(--transition-normal);
}

.skill-group:hover {
  transform: translateY(-4px);
  border-color: var(--primary-glow);
}

.skill-group-title {
  font-size: var(--text-lg);
  font-weight: 600;
}

.skill-badge[data-proficiency="expert"] .tech-chip {
  border-color: var(--primary-glow);
  color: var(--text-primary);
}

/* === Timeline === */
.timeline {
  position: relative;
}

.timeline-spine {
  position: absolute;
  left: 1rem;
  top: 0;
  bottom: 0;
  width: 2px;
  background: linear-gradient(to bottom, var(--primary-soft), var(--primary-glow), transparent);
}

.timeline-item {
  position: relative;
  padding-bottom: 2.5rem;
}

.timeline-item:last-child {
  padding-bottom: 0;
}

.timeline-node {
  position: absolute;
  left: 1rem;
  top: 0;
  transform: translateX(-50%);
  width: 2rem;
  height: 2rem;
  border-radius: 999px;
  border: 2px solid var(--primary);
  background: var(--primary-soft);
  display: flex;
  align-items: center;
  justify-content: center;
  box-shadow: 0 0 12px var(--primary-glow);
}

.timeline-node-dot {
  width: 0.75rem;
  height: 0.75rem;
  border-radius: 999px;
  background: var(--primary);
}

.timeline-card {
  margin-left: 3rem;
  border: 1px solid var(--border);
  background: var(--card);
  border-radius: var(--radius-lg);
  padding: 1.5rem;
}

.timeline-card-header {
  display: flex;
  justify-content: space-between;
  gap: 0.5rem;
  margin-bottom: 0.75rem;
}

.timeline-title {
  font-size: var(--text-lg);
  font-weight: 600;
}

.timeline-subtitle,
.timeline-period {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.timeline-period {
  font-weight: 500;
  flex-shrink: 0;
}

.timeline-description {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
}

@media (max-width: 640px) {
  .contact-grid { grid-template-columns: 1fr; }
}

.contact-label {
  font-size: var(--text-xs);
  font-weight: 500;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--text-muted);
}

.contact-email {
  margin-top: 0.35rem;
  display: flex;
  gap: 0.5rem;
}

.contact-value {
  margin-top: 0.35rem;
  font-size: var(--text-sm);
}

.contact-socials {
  display: flex;
  gap: 0.75rem;
  padding-top: 1.25rem;
}

/* === Dialog === */
.dialog-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.6);
  backdrop-filter: blur(4px);
  animation: fade-in 150ms ease-out;
}

.dialog {
  width: min(56rem, 92vw);
  max-height: 90vh;
  display: flex;
  flex-direction: column;
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  background: var(--bg-raised);
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
  outline: none;
}

.dialog-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 1.25rem;
  border-bottom: 1px solid var(--border);
}

.dialog-title {
  font-size: var(--text-lg);
  font-weight: 600;
}

.dialog-actions {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.dialog-body {
  flex: 1;
  overflow: auto;
}

.resume-frame {
  position: relative;
  height: 75vh;
}

.resume-loading {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  color: var(--text-muted);
}

.resume-object {
  width: 100%;
  height: 100%;
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.resume-object.loaded {
  opacity: 1;
}

.resume-fallback {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  padding: 4rem 1.5rem;
  text-align: center;
}

.resume-fallback-title {
  font-size: var(--text-lg);
  font-weight: 600;
}

.resume-fallback-hint {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.resume-fallback-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
}

/* === Toast === */
.toast {
  position: fixed;
  bottom: 1rem;
  right: 1rem;
  z-index: 120;
  display: flex;
  align-items: center;
  gap: 0.75rem;
  border: 1px solid var(--border);
  border-radius: var(--radius-sm);
  background: var(--bg-raised);
  padding: 0.75rem 1rem;
  box-shadow: 0 10px 25px rgba(0, 0, 0, 0.4);
  animation: toast-in 200ms ease-out;
}

.toast-message {
  font-size: var(--text-sm);
}

@keyframes toast-in {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: none; }
}

/* === Footer === */
.site-footer {
  padding: 2rem 0;
  border-top: 1px solid var(--border);
  text-align: center;
  font-size: var(--text-sm);
  color: var(--text-muted);
}
"#;
